//! Payload-free failure signals.

use thiserror::Error;

/// Failure signals raised by the authentication, CDN, storage and
/// configuration layers when there is no HTTP response to classify.
///
/// Each variant is identified by its name alone. Only
/// [`MarkerError::AmbiguousEndpoints`] carries data, and that data is for
/// display only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkerError {
    /// Credentials were rejected by the identity service.
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// The authenticated identity may not perform the operation.
    #[error("Authorization failure")]
    AuthorizationFailure,

    /// The requested identity backend is not registered.
    #[error("Authentication system not found")]
    AuthSystemNotFound,

    /// A CDN operation failed.
    #[error("CDN operation failed")]
    CDNFailed,

    /// No endpoint in the service catalog matched.
    #[error("Endpoint not found")]
    EndpointNotFound,

    /// The requested compute flavor does not exist.
    #[error("Flavor not found")]
    FlavorNotFound,

    /// A local file does not exist.
    #[error("File not found")]
    FileNotFound,

    /// A local folder does not exist.
    #[error("Folder not found")]
    FolderNotFound,

    /// CDN metadata is malformed or refers to unknown keys.
    #[error("Invalid CDN metadata")]
    InvalidCDNMetadata,

    /// The configuration file could not be parsed.
    #[error("Invalid configuration file")]
    InvalidConfigurationFile,

    /// The credential file could not be parsed.
    #[error("Invalid credential file")]
    InvalidCredentialFile,

    /// A multipart upload ID is not recognized.
    #[error("Invalid upload ID")]
    InvalidUploadID,

    /// A block volume cannot be resized as requested.
    #[error("Invalid volume resize")]
    InvalidVolumeResize,

    /// A required name was not supplied.
    #[error("Missing name")]
    MissingName,

    /// The storage container does not exist.
    #[error("No such container")]
    NoSuchContainer,

    /// The storage object does not exist.
    #[error("No such object")]
    NoSuchObject,

    /// An operation requires authentication that has not happened yet.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// The container is not published to the CDN.
    #[error("Container is not CDN enabled")]
    NotCDNEnabled,

    /// The identity service offers no token lookup.
    #[error("No token lookup available")]
    NoTokenLookupException,

    /// An upload did not complete.
    #[error("Upload failed")]
    UploadFailed,

    /// More than one service catalog endpoint matched.
    #[error("AmbiguousEndpoints: {}", render_endpoints(.endpoints.as_deref()))]
    AmbiguousEndpoints {
        /// The matching endpoints, in catalog order.
        endpoints: Option<Vec<String>>,
    },
}

fn render_endpoints(endpoints: Option<&[String]>) -> String {
    match endpoints {
        Some(list) => format!("{:?}", list),
        None => "None".to_string(),
    }
}

impl MarkerError {
    /// Identity names of every marker, in declaration order.
    pub const ALL_NAMES: [&'static str; 21] = [
        "AuthenticationFailed",
        "AuthorizationFailure",
        "AuthSystemNotFound",
        "CDNFailed",
        "EndpointNotFound",
        "FlavorNotFound",
        "FileNotFound",
        "FolderNotFound",
        "InvalidCDNMetadata",
        "InvalidConfigurationFile",
        "InvalidCredentialFile",
        "InvalidUploadID",
        "InvalidVolumeResize",
        "MissingName",
        "NoSuchContainer",
        "NoSuchObject",
        "NotAuthenticated",
        "NotCDNEnabled",
        "NoTokenLookupException",
        "UploadFailed",
        "AmbiguousEndpoints",
    ];

    /// Creates an ambiguous endpoints error listing the matches.
    pub fn ambiguous_endpoints<I, S>(endpoints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MarkerError::AmbiguousEndpoints {
            endpoints: Some(endpoints.into_iter().map(Into::into).collect()),
        }
    }

    /// Returns the identity name of this marker.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AuthenticationFailed => "AuthenticationFailed",
            Self::AuthorizationFailure => "AuthorizationFailure",
            Self::AuthSystemNotFound => "AuthSystemNotFound",
            Self::CDNFailed => "CDNFailed",
            Self::EndpointNotFound => "EndpointNotFound",
            Self::FlavorNotFound => "FlavorNotFound",
            Self::FileNotFound => "FileNotFound",
            Self::FolderNotFound => "FolderNotFound",
            Self::InvalidCDNMetadata => "InvalidCDNMetadata",
            Self::InvalidConfigurationFile => "InvalidConfigurationFile",
            Self::InvalidCredentialFile => "InvalidCredentialFile",
            Self::InvalidUploadID => "InvalidUploadID",
            Self::InvalidVolumeResize => "InvalidVolumeResize",
            Self::MissingName => "MissingName",
            Self::NoSuchContainer => "NoSuchContainer",
            Self::NoSuchObject => "NoSuchObject",
            Self::NotAuthenticated => "NotAuthenticated",
            Self::NotCDNEnabled => "NotCDNEnabled",
            Self::NoTokenLookupException => "NoTokenLookupException",
            Self::UploadFailed => "UploadFailed",
            Self::AmbiguousEndpoints { .. } => "AmbiguousEndpoints",
        }
    }

    /// Resolves a marker by its identity name.
    ///
    /// `AmbiguousEndpoints` resolves without an endpoint list.
    pub fn from_name(name: &str) -> Option<Self> {
        let marker = match name {
            "AuthenticationFailed" => Self::AuthenticationFailed,
            "AuthorizationFailure" => Self::AuthorizationFailure,
            "AuthSystemNotFound" => Self::AuthSystemNotFound,
            "CDNFailed" => Self::CDNFailed,
            "EndpointNotFound" => Self::EndpointNotFound,
            "FlavorNotFound" => Self::FlavorNotFound,
            "FileNotFound" => Self::FileNotFound,
            "FolderNotFound" => Self::FolderNotFound,
            "InvalidCDNMetadata" => Self::InvalidCDNMetadata,
            "InvalidConfigurationFile" => Self::InvalidConfigurationFile,
            "InvalidCredentialFile" => Self::InvalidCredentialFile,
            "InvalidUploadID" => Self::InvalidUploadID,
            "InvalidVolumeResize" => Self::InvalidVolumeResize,
            "MissingName" => Self::MissingName,
            "NoSuchContainer" => Self::NoSuchContainer,
            "NoSuchObject" => Self::NoSuchObject,
            "NotAuthenticated" => Self::NotAuthenticated,
            "NotCDNEnabled" => Self::NotCDNEnabled,
            "NoTokenLookupException" => Self::NoTokenLookupException,
            "UploadFailed" => Self::UploadFailed,
            "AmbiguousEndpoints" => Self::AmbiguousEndpoints { endpoints: None },
            _ => return None,
        };
        Some(marker)
    }

    /// Returns the endpoint list carried by `AmbiguousEndpoints`.
    pub fn endpoints(&self) -> Option<&[String]> {
        match self {
            Self::AmbiguousEndpoints { endpoints } => endpoints.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for name in MarkerError::ALL_NAMES {
            let marker = MarkerError::from_name(name).unwrap();
            assert_eq!(marker.name(), name);
        }
        assert_eq!(MarkerError::from_name("Unauthorized"), None);
    }

    #[test]
    fn test_names_are_distinct() {
        let mut names = MarkerError::ALL_NAMES.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), MarkerError::ALL_NAMES.len());
    }

    #[test]
    fn test_ambiguous_endpoints_display() {
        let error = MarkerError::ambiguous_endpoints(["https://dfw.example", "https://ord.example"]);
        assert_eq!(
            error.to_string(),
            r#"AmbiguousEndpoints: ["https://dfw.example", "https://ord.example"]"#
        );
        assert_eq!(error.endpoints().map(<[String]>::len), Some(2));

        let bare = MarkerError::AmbiguousEndpoints { endpoints: None };
        assert_eq!(bare.to_string(), "AmbiguousEndpoints: None");
        assert_eq!(bare.endpoints(), None);
    }

    #[test]
    fn test_payload_free_markers_have_no_endpoints() {
        assert_eq!(MarkerError::UploadFailed.endpoints(), None);
        assert_eq!(MarkerError::UploadFailed.to_string(), "Upload failed");
    }
}
