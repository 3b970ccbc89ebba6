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

//! Read-only access to the timestamp token embedded in a certificate.

use bcder::{decode::Constructed, Mode};

use crate::{
    asn1::{
        rfc3161::{TimeStampResp, TstInfo, OID_CONTENT_TYPE_TST_INFO, OID_SHA256},
        rfc5652::{ContentInfo, OID_ID_SIGNED_DATA},
    },
    Error, Result,
};

/// A parsed timestamp token.
///
/// Certificates issued by the service decode to either a full DER time
/// stamp response or a bare token; both shapes are accepted. The token is
/// never constructed or modified here, only read.
#[derive(Debug)]
pub struct TimeStampToken {
    tst_info: TstInfo,
}

impl TimeStampToken {
    /// Decode a DER timestamp token or response.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let token = token_content_info(der)?;

        if token.content_type != OID_ID_SIGNED_DATA {
            return Err(Error::DecodeError(
                "time stamp has an invalid OID".to_string(),
            ));
        }

        let signed_data = token
            .content
            .decode(crate::asn1::rfc5652::SignedData::take_from)
            .map_err(|err| Error::DecodeError(err.to_string()))?;

        if signed_data.content_info.content_type != OID_CONTENT_TYPE_TST_INFO {
            return Err(Error::DecodeError(
                "signed data does not carry token info".to_string(),
            ));
        }

        let content = signed_data.content_info.content.ok_or_else(|| {
            Error::DecodeError("signed data carries no token info content".to_string())
        })?;

        let tst_info = Constructed::decode(content.to_bytes(), Mode::Der, TstInfo::take_from)
            .map_err(|err| Error::DecodeError(err.to_string()))?;

        Ok(Self { tst_info })
    }

    /// The digest that was embedded when the certificate was produced
    /// (`messageImprint.hashedMessage`).
    pub fn hashed_message(&self) -> Vec<u8> {
        self.tst_info.message_imprint.hashed_message.to_bytes().to_vec()
    }

    /// The token's generation time as its raw `GeneralizedTime` string.
    pub fn gen_time(&self) -> &str {
        self.tst_info.gen_time.as_str()
    }

    /// Whether the embedded digest was produced with SHA-256, the only
    /// algorithm the service issues certificates for.
    pub fn is_sha256(&self) -> bool {
        self.tst_info.message_imprint.hash_algorithm.algorithm == OID_SHA256
    }
}

/// Unwrap the token from a full response, or accept a bare token.
fn token_content_info(der: &[u8]) -> Result<ContentInfo> {
    if let Ok(resp) = Constructed::decode(der, Mode::Der, TimeStampResp::take_from) {
        let granted = resp.status.is_granted();

        return match resp.time_stamp_token {
            Some(token) => Ok(token),
            None if granted => Err(Error::DecodeError(
                "response carries no time stamp token".to_string(),
            )),
            None => Err(Error::DecodeError(
                "time stamp request was rejected".to_string(),
            )),
        };
    }

    Constructed::decode(der, Mode::Der, ContentInfo::take_from)
        .map_err(|_| Error::DecodeError("no time stamp token found".to_string()))
}
