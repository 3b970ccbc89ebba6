// Copyright 2025 the pscworld-client authors. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.

// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

//! Error types reported by the PSC World client.

use log::warn;
use thiserror::Error;

/// A convenience wrapper for `Result` with a [`Error`] error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Describes errors that can occur while talking to the PSC World service
/// or while processing its certificates locally.
#[derive(Debug, Error)]
pub enum Error {
    /// The service itself rejected the request with a coded failure.
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// Unable to complete the HTTP request.
    ///
    /// This error is used _only_ if no response was received from the
    /// service. An error response is described by `HttpErrorResponse`.
    #[error("unable to complete HTTP request ({0})")]
    Transport(String),

    /// The service responded with an HTTP error condition.
    #[error("service responded with an HTTP error (status = {0})")]
    HttpErrorResponse(u16),

    /// The SOAP response envelope could not be understood.
    #[error("malformed SOAP response ({0})")]
    MalformedResponse(String),

    /// The certificate validation payload was not valid XML for the
    /// certificate model.
    #[error("error while parsing certificate XML ({0})")]
    XmlParsingError(String),

    /// An error was encountered while decoding a DER timestamp token.
    #[error("decode error ({0})")]
    DecodeError(String),

    /// A base64 value could not be decoded.
    #[error(transparent)]
    Base64(#[from] base64::DecodeError),

    /// An I/O error occurred while reading the data stream.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The configured endpoint is not a valid URL.
    #[error("invalid endpoint URL ({0})")]
    BadUrl(#[from] url::ParseError),
}

impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, _) => Self::HttpErrorResponse(code),
            ureq::Error::Transport(transport) => Self::Transport(transport.to_string()),
        }
    }
}

/// Coded failures reported by the PSC World service.
///
/// The service encodes failures as an `ERROR: ` prefix followed by one of a
/// fixed set of codes. Every published code maps onto exactly one variant
/// here; a code outside the published set maps onto
/// [`RemoteError::Unrecognized`] rather than being dropped.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum RemoteError {
    /// `USUARIO_NO_PROPORCIONADO`
    #[error("the user was not provided")]
    UserNotProvided,

    /// `PASSWORD_NO_PROPORCIONADO`
    #[error("the password was not provided")]
    PasswordNotProvided,

    /// `USUARIO_INCORRECTO`, `PASSWORD_INCORRECTO`, or
    /// `ERROR_USUARIO_NO_EXISTENTE`.
    ///
    /// For the first two codes, `detail` echoes the offending username or
    /// password, matching the service's historical error text. Use
    /// [`RemoteError::redacted`] before writing to a log sink.
    #[error("invalid credentials: {detail}")]
    InvalidCredentials {
        /// Restates which credential the service rejected. May contain the
        /// credential value itself.
        detail: String,
    },

    /// `ID_NO_PROPORCIONADO`
    #[error("the id was not provided")]
    IdNotProvided,

    /// `BASE64_NO_PROPORCIONADO`
    #[error("the hash was not provided")]
    HashNotProvided,

    /// `HASH_NO_ES_SHA256`
    #[error("the provided hash is not SHA-256")]
    UnknownHash,

    /// `IDENTIFICADOR_EXISTENTE`
    #[error("the provided id is duplicated")]
    DuplicatedId,

    /// `EMPRESA_NO_ACTIVA`
    #[error("the account is inactive")]
    InactiveAccount,

    /// `EMPRESA_SIN_SALDO`
    #[error("the account does not have funds")]
    InsufficientFunds,

    /// `CERTIFICADO_INCORRECTO`
    #[error("the certificate is not signed by PSC World or its providers")]
    InvalidCertificate,

    /// `CONSTANCIA_NO_ENCONTRADA`
    #[error("the certificate can not be found")]
    CertificateNotFound,

    /// `OID_INCORRECTO`
    #[error("the certificate policy OID is not recognized")]
    InvalidOid,

    /// Any code outside the published table.
    #[error("unrecognized service error code `{code}`")]
    Unrecognized {
        /// The code exactly as the service sent it.
        code: String,
    },
}

impl RemoteError {
    /// Map a wire code onto its failure kind.
    ///
    /// `username` and `password` are the credentials the request carried;
    /// the credential-related messages restate them, as the service's own
    /// error text does.
    pub(crate) fn from_code(code: &str, username: &str, password: &str) -> Self {
        match code {
            "USUARIO_NO_PROPORCIONADO" => Self::UserNotProvided,
            "PASSWORD_NO_PROPORCIONADO" => Self::PasswordNotProvided,
            "USUARIO_INCORRECTO" => Self::InvalidCredentials {
                detail: format!("the username {username} is invalid"),
            },
            "PASSWORD_INCORRECTO" => Self::InvalidCredentials {
                detail: format!("the password {password} is invalid"),
            },
            "ERROR_USUARIO_NO_EXISTENTE" => Self::InvalidCredentials {
                detail: "the username and password do not exist".to_string(),
            },
            "ID_NO_PROPORCIONADO" => Self::IdNotProvided,
            "BASE64_NO_PROPORCIONADO" => Self::HashNotProvided,
            "HASH_NO_ES_SHA256" => Self::UnknownHash,
            "IDENTIFICADOR_EXISTENTE" => Self::DuplicatedId,
            "EMPRESA_NO_ACTIVA" => Self::InactiveAccount,
            "EMPRESA_SIN_SALDO" => Self::InsufficientFunds,
            "CERTIFICADO_INCORRECTO" => Self::InvalidCertificate,
            "CONSTANCIA_NO_ENCONTRADA" => Self::CertificateNotFound,
            "OID_INCORRECTO" => Self::InvalidOid,
            _ => {
                warn!("PSC World returned an unrecognized error code: {code}");
                Self::Unrecognized {
                    code: code.to_string(),
                }
            }
        }
    }

    /// A rendering of this failure that never contains credential values.
    ///
    /// Identical to the `Display` output except for
    /// [`RemoteError::InvalidCredentials`], whose detail string is dropped.
    pub fn redacted(&self) -> String {
        match self {
            Self::InvalidCredentials { .. } => "invalid credentials".to_string(),
            other => other.to_string(),
        }
    }
}
