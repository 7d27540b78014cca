macro_rules! status_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident = $code:literal,)* }) => {
        $(#[$meta])*
        #[repr(i32)]
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant = $code,)*
        }

        impl $name {
            /// Look up a status by its numeric code.
            pub fn from_code(code: i32) -> Option<$name> {
                match code {
                    $($code => Some($name::$variant),)*
                    _ => None,
                }
            }

            pub fn code(self) -> i32 {
                self as i32
            }

            /// Whether the code reports success, that is any code below 400.
            pub fn is_ok(self) -> bool {
                self.code() < 400
            }
        }
    };
}

status_enum! {
    /// Status codes of an HTTP response.
    ///
    /// Codes from 1000 up are produced locally, never by a server.
    HttpStatus {
        Ok = 200,
        Created = 201,
        Accepted = 202,
        NoContent = 204,
        ResetContent = 205,
        PartialContent = 206,
        MultipleChoices = 300,
        MovedPermanently = 301,
        MovedTemporarily = 302,
        NotModified = 304,
        BadRequest = 400,
        Unauthorized = 401,
        Forbidden = 403,
        NotFound = 404,
        RangeNotSatisfiable = 407,
        InternalServerError = 500,
        NotImplemented = 501,
        BadGateway = 502,
        ServiceNotAvailable = 503,
        GatewayTimeout = 504,
        VersionNotSupported = 505,
        InvalidResponse = 1000,
        ConnectionFailed = 1001,
    }
}

status_enum! {
    /// Status codes of an FTP response.
    ///
    /// Codes from 1000 up are produced locally, never by a server.
    FtpStatus {
        RestartMarkerReply = 110,
        ServiceReadySoon = 120,
        DataConnectionAlreadyOpened = 125,
        OpeningDataConnection = 150,
        Ok = 200,
        PointlessCommand = 202,
        SystemStatus = 211,
        DirectoryStatus = 212,
        FileStatus = 213,
        HelpMessage = 214,
        SystemType = 215,
        ServiceReady = 220,
        ClosingConnection = 221,
        DataConnectionOpened = 225,
        ClosingDataConnection = 226,
        EnteringPassiveMode = 227,
        LoggedIn = 230,
        FileActionOk = 250,
        DirectoryOk = 257,
        NeedPassword = 331,
        NeedAccountToLogIn = 332,
        NeedInformation = 350,
        ServiceUnavailable = 421,
        DataConnectionUnavailable = 425,
        TransferAborted = 426,
        FileActionAborted = 450,
        LocalError = 451,
        InsufficientStorageSpace = 452,
        CommandUnknown = 500,
        ParametersUnknown = 501,
        CommandNotImplemented = 502,
        BadCommandSequence = 503,
        ParameterNotImplemented = 504,
        NotLoggedIn = 530,
        NeedAccountToStore = 532,
        FileUnavailable = 550,
        PageTypeUnknown = 551,
        NotEnoughMemory = 552,
        FilenameNotAllowed = 553,
        InvalidResponse = 1000,
        ConnectionFailed = 1001,
        ConnectionClosed = 1002,
        InvalidFile = 1003,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn http_codes() {
        assert_eq!(404, HttpStatus::NotFound.code());
        assert_eq!(Some(HttpStatus::GatewayTimeout), HttpStatus::from_code(504));
        assert_eq!(None, HttpStatus::from_code(418));
        assert!(HttpStatus::NotModified.is_ok());
        assert!(!HttpStatus::ConnectionFailed.is_ok());
    }

    #[test]
    fn ftp_codes() {
        assert_eq!(227, FtpStatus::EnteringPassiveMode as i32);
        assert_eq!(Some(FtpStatus::InvalidFile), FtpStatus::from_code(1003));
        assert!(FtpStatus::NeedPassword.is_ok());
        assert!(!FtpStatus::NotLoggedIn.is_ok());
    }
}
