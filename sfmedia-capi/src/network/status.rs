//! HTTP and FTP response codes.
use crate::ctypes::c_enum;
use crate::ffi::extern_fn;
use sfmedia::network::{FtpStatus, HttpStatus};

c_enum!(
    /// The status code of an HTTP response. Codes from 1000 up are produced locally.
    sfHttpStatus => HttpStatus {
        sfHttpOk = Ok = 200,
        sfHttpCreated = Created = 201,
        sfHttpAccepted = Accepted = 202,
        sfHttpNoContent = NoContent = 204,
        sfHttpResetContent = ResetContent = 205,
        sfHttpPartialContent = PartialContent = 206,
        sfHttpMultipleChoices = MultipleChoices = 300,
        sfHttpMovedPermanently = MovedPermanently = 301,
        sfHttpMovedTemporarily = MovedTemporarily = 302,
        sfHttpNotModified = NotModified = 304,
        sfHttpBadRequest = BadRequest = 400,
        sfHttpUnauthorized = Unauthorized = 401,
        sfHttpForbidden = Forbidden = 403,
        sfHttpNotFound = NotFound = 404,
        sfHttpRangeNotSatisfiable = RangeNotSatisfiable = 407,
        sfHttpInternalServerError = InternalServerError = 500,
        sfHttpNotImplemented = NotImplemented = 501,
        sfHttpBadGateway = BadGateway = 502,
        sfHttpServiceNotAvailable = ServiceNotAvailable = 503,
        sfHttpGatewayTimeout = GatewayTimeout = 504,
        sfHttpVersionNotSupported = VersionNotSupported = 505,
        sfHttpInvalidResponse = InvalidResponse = 1000,
        sfHttpConnectionFailed = ConnectionFailed = 1001,
    }
);

c_enum!(
    /// The status code of an FTP response. Codes from 1000 up are produced locally.
    sfFtpStatus => FtpStatus {
        sfFtpRestartMarkerReply = RestartMarkerReply = 110,
        sfFtpServiceReadySoon = ServiceReadySoon = 120,
        sfFtpDataConnectionAlreadyOpened = DataConnectionAlreadyOpened = 125,
        sfFtpOpeningDataConnection = OpeningDataConnection = 150,
        sfFtpOk = Ok = 200,
        sfFtpPointlessCommand = PointlessCommand = 202,
        sfFtpSystemStatus = SystemStatus = 211,
        sfFtpDirectoryStatus = DirectoryStatus = 212,
        sfFtpFileStatus = FileStatus = 213,
        sfFtpHelpMessage = HelpMessage = 214,
        sfFtpSystemType = SystemType = 215,
        sfFtpServiceReady = ServiceReady = 220,
        sfFtpClosingConnection = ClosingConnection = 221,
        sfFtpDataConnectionOpened = DataConnectionOpened = 225,
        sfFtpClosingDataConnection = ClosingDataConnection = 226,
        sfFtpEnteringPassiveMode = EnteringPassiveMode = 227,
        sfFtpLoggedIn = LoggedIn = 230,
        sfFtpFileActionOk = FileActionOk = 250,
        sfFtpDirectoryOk = DirectoryOk = 257,
        sfFtpNeedPassword = NeedPassword = 331,
        sfFtpNeedAccountToLogIn = NeedAccountToLogIn = 332,
        sfFtpNeedInformation = NeedInformation = 350,
        sfFtpServiceUnavailable = ServiceUnavailable = 421,
        sfFtpDataConnectionUnavailable = DataConnectionUnavailable = 425,
        sfFtpTransferAborted = TransferAborted = 426,
        sfFtpFileActionAborted = FileActionAborted = 450,
        sfFtpLocalError = LocalError = 451,
        sfFtpInsufficientStorageSpace = InsufficientStorageSpace = 452,
        sfFtpCommandUnknown = CommandUnknown = 500,
        sfFtpParametersUnknown = ParametersUnknown = 501,
        sfFtpCommandNotImplemented = CommandNotImplemented = 502,
        sfFtpBadCommandSequence = BadCommandSequence = 503,
        sfFtpParameterNotImplemented = ParameterNotImplemented = 504,
        sfFtpNotLoggedIn = NotLoggedIn = 530,
        sfFtpNeedAccountToStore = NeedAccountToStore = 532,
        sfFtpFileUnavailable = FileUnavailable = 550,
        sfFtpPageTypeUnknown = PageTypeUnknown = 551,
        sfFtpNotEnoughMemory = NotEnoughMemory = 552,
        sfFtpFilenameNotAllowed = FilenameNotAllowed = 553,
        sfFtpInvalidResponse = InvalidResponse = 1000,
        sfFtpConnectionFailed = ConnectionFailed = 1001,
        sfFtpConnectionClosed = ConnectionClosed = 1002,
        sfFtpInvalidFile = InvalidFile = 1003,
    }
);

extern_fn! {
    /// Whether `status` reports success, that is any code below 400.
    fn sfHttpStatus_isOk(status: sfHttpStatus) -> bool {
        HttpStatus::from(status).is_ok()
    }
}

extern_fn! {
    /// Whether `status` reports success, that is any code below 400.
    fn sfFtpStatus_isOk(status: sfFtpStatus) -> bool {
        FtpStatus::from(status).is_ok()
    }
}
