use sfmedia::system::{Angle, Color, FloatRect, IntRect, Time, Vector2, Vector2f, Vector2u};

#[cfg(feature = "graphics")]
#[test]
fn image_to_sprite() {
    use sfmedia::graphics::{AsTransformable, Image, Sprite, Texture};

    let mut image = Image::new(Vector2u::new(16, 8), Color::BLACK);
    image
        .set_pixel(Vector2u::new(15, 7), Color::from_integer(0xFF8000FF))
        .unwrap();

    let path = std::env::temp_dir().join(format!("sfmedia-scenario-{}.png", std::process::id()));
    image.save_to_file(&path).unwrap();
    let texture = Texture::from_file(
        &path,
        Some(IntRect::new(Vector2::new(8, 0), Vector2::new(8, 8))),
    )
    .unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(Vector2u::new(8, 8), texture.size());
    assert_eq!(
        Some(Color::rgb(255, 128, 0)),
        texture.copy_to_image().pixel(Vector2u::new(7, 7))
    );

    let mut sprite = Sprite::new(&texture);
    sprite.transformable_mut().set_origin(Vector2f::new(4.0, 4.0));
    sprite.transformable_mut().set_rotation(Angle::degrees(90.0));
    let bounds = sprite.global_bounds();
    assert!((bounds.position.x + 4.0).abs() < 1e-4);
    assert!((bounds.size.y - 8.0).abs() < 1e-4);
}

#[cfg(feature = "graphics")]
#[test]
fn shapes_share_transformable() {
    use sfmedia::graphics::{AsTransformable, CircleShape, RectangleShape};

    let mut circle = CircleShape::circle(5.0, 16);
    circle
        .transformable_mut()
        .set_position(Vector2f::new(100.0, 100.0));
    let bounds = circle.global_bounds();
    assert!((bounds.position.x - 100.0).abs() < 1e-3);
    assert!((bounds.size.x - 10.0).abs() < 1e-3);

    let mut rectangle = RectangleShape::rectangle(Vector2f::new(4.0, 4.0));
    rectangle.transformable_mut().set_scale(Vector2f::new(0.5, 2.0));
    assert_eq!(
        FloatRect::new(Vector2f::new(0.0, 0.0), Vector2f::new(2.0, 8.0)),
        rectangle.global_bounds()
    );
}

#[cfg(feature = "audio")]
#[test]
fn stream_through_buffer() {
    use sfmedia::audio::{Chunk, SoundSource, SoundStatus, SoundStream, Stream};

    struct Tone {
        samples: Vec<i16>,
        served: bool,
    }

    impl SoundStream for Tone {
        fn on_get_data(&mut self) -> Chunk<'_> {
            let more = !self.served;
            self.served = true;
            Chunk {
                samples: if more { self.samples.as_slice() } else { &[] },
                more,
            }
        }

        fn on_seek(&mut self, offset: Time) {
            self.served = offset != Time::ZERO;
        }
    }

    let tone = Tone {
        samples: vec![100; 441],
        served: false,
    };
    let mut stream = Stream::new(tone, 1, 44100, &[]).unwrap();
    stream.play();

    let mut mixed = Vec::new();
    assert!(stream.pull(&mut mixed));
    assert_eq!(Time::milliseconds(10), stream.playing_offset());
    assert!(!stream.pull(&mut mixed));
    assert_eq!(SoundStatus::Stopped, stream.status());
    assert_eq!(441, mixed.len());
}

#[cfg(feature = "network")]
#[test]
fn tcp_echo_over_loopback() {
    use sfmedia::network::{IpAddress, SocketStatus, TcpListener, TcpSocket};

    let mut listener = TcpListener::new();
    assert_eq!(SocketStatus::Done, listener.listen(0, IpAddress::LOCAL_HOST));
    let port = listener.local_port();

    let client = std::thread::spawn(move || {
        let mut socket = TcpSocket::new();
        assert_eq!(
            SocketStatus::Done,
            socket.connect(IpAddress::LOCAL_HOST, port, Time::ZERO)
        );
        assert_eq!(SocketStatus::Done, socket.send(b"echo"));
        let mut reply = [0u8; 4];
        let (status, count) = socket.receive(&mut reply);
        assert_eq!(SocketStatus::Done, status);
        reply[..count].to_vec()
    });

    let mut peer = TcpSocket::new();
    assert_eq!(SocketStatus::Done, listener.accept(&mut peer));
    let mut buffer = [0u8; 4];
    let (status, count) = peer.receive(&mut buffer);
    assert_eq!(SocketStatus::Done, status);
    assert_eq!(SocketStatus::Done, peer.send(&buffer[..count]));

    assert_eq!(b"echo".to_vec(), client.join().unwrap());
}
