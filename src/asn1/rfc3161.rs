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

//! ASN.1 types defined by [RFC 3161] (time stamp protocol).
//!
//! [RFC 3161]: https://datatracker.ietf.org/doc/html/rfc3161

use bcder::{
    decode::{Constructed, DecodeError, Source},
    Captured, ConstOid, Integer, OctetString, Oid, Tag,
};

use crate::asn1::rfc5652::ContentInfo;

/// Content type OID for time stamp token info.
///
/// 1.2.840.113549.1.9.16.1.4
pub const OID_CONTENT_TYPE_TST_INFO: ConstOid = Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 16, 1, 4]);

/// Digest algorithm OID for SHA-256.
///
/// 2.16.840.1.101.3.4.2.1
pub const OID_SHA256: ConstOid = Oid(&[96, 134, 72, 1, 101, 3, 4, 2, 1]);

/// A time stamp response.
///
/// ```ASN.1
/// TimeStampResp ::= SEQUENCE {
///     status PKIStatusInfo,
///     timeStampToken TimeStampToken OPTIONAL }
///
/// TimeStampToken ::= ContentInfo
/// ```
#[derive(Clone, Debug)]
pub struct TimeStampResp {
    pub status: PkiStatusInfo,
    pub time_stamp_token: Option<ContentInfo>,
}

impl TimeStampResp {
    pub fn take_from<S: Source>(cons: &mut Constructed<S>) -> Result<Self, DecodeError<S::Error>> {
        cons.take_sequence(|cons| {
            let status = PkiStatusInfo::take_from(cons)?;
            let time_stamp_token = ContentInfo::take_opt_from(cons)?;

            Ok(Self {
                status,
                time_stamp_token,
            })
        })
    }
}

/// Status of a time stamp request. The optional status text and failure
/// info are consumed without being interpreted.
///
/// ```ASN.1
/// PKIStatusInfo ::= SEQUENCE {
///     status PKIStatus,
///     statusString PKIFreeText OPTIONAL,
///     failInfo PKIFailureInfo OPTIONAL }
/// ```
#[derive(Clone, Debug)]
pub struct PkiStatusInfo {
    pub status: PkiStatus,
}

impl PkiStatusInfo {
    pub fn take_from<S: Source>(cons: &mut Constructed<S>) -> Result<Self, DecodeError<S::Error>> {
        cons.take_sequence(|cons| {
            let status = PkiStatus::take_from(cons)?;
            let _rest = cons.capture_all()?;

            Ok(Self { status })
        })
    }

    /// `true` if a token is expected to accompany this status.
    pub fn is_granted(&self) -> bool {
        matches!(
            self.status,
            PkiStatus::Granted | PkiStatus::GrantedWithMods
        )
    }
}

/// ```ASN.1
/// PKIStatus ::= INTEGER {
///     granted                (0),
///     grantedWithMods        (1),
///     rejection              (2),
///     waiting                (3),
///     revocationWarning      (4),
///     revocationNotification (5) }
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PkiStatus {
    Granted = 0,
    GrantedWithMods = 1,
    Rejection = 2,
    Waiting = 3,
    RevocationWarning = 4,
    RevocationNotification = 5,
}

impl PkiStatus {
    pub fn take_from<S: Source>(cons: &mut Constructed<S>) -> Result<Self, DecodeError<S::Error>> {
        match cons.take_primitive_if(Tag::INTEGER, Integer::i8_from_primitive)? {
            0 => Ok(Self::Granted),
            1 => Ok(Self::GrantedWithMods),
            2 => Ok(Self::Rejection),
            3 => Ok(Self::Waiting),
            4 => Ok(Self::RevocationWarning),
            5 => Ok(Self::RevocationNotification),
            _ => Err(cons.content_err("unknown PKIStatus value")),
        }
    }
}

/// Time stamp token info, reduced to the fields this crate reads. The
/// leading version, policy, and serial number are decoded for structural
/// validation only; the optional tail (accuracy, ordering, nonce, tsa,
/// extensions) is consumed unparsed.
///
/// ```ASN.1
/// TSTInfo ::= SEQUENCE {
///     version        INTEGER { v1(1) },
///     policy         TSAPolicyId,
///     messageImprint MessageImprint,
///     serialNumber   INTEGER,
///     genTime        GeneralizedTime,
///     accuracy       Accuracy OPTIONAL,
///     ordering       BOOLEAN DEFAULT FALSE,
///     nonce          INTEGER OPTIONAL,
///     tsa            [0] GeneralName OPTIONAL,
///     extensions     [1] IMPLICIT Extensions OPTIONAL }
/// ```
#[derive(Clone, Debug)]
pub struct TstInfo {
    pub message_imprint: MessageImprint,
    pub gen_time: GeneralizedTime,
}

impl TstInfo {
    pub fn take_from<S: Source>(cons: &mut Constructed<S>) -> Result<Self, DecodeError<S::Error>> {
        cons.take_sequence(|cons| {
            let _version = Integer::take_from(cons)?;
            let _policy = Oid::take_from(cons)?;
            let message_imprint = MessageImprint::take_from(cons)?;
            let _serial_number = Integer::take_from(cons)?;
            let gen_time = GeneralizedTime::take_from(cons)?;
            let _rest = cons.capture_all()?;

            Ok(Self {
                message_imprint,
                gen_time,
            })
        })
    }
}

/// The digest a time stamp token vouches for.
///
/// ```ASN.1
/// MessageImprint ::= SEQUENCE {
///     hashAlgorithm AlgorithmIdentifier,
///     hashedMessage OCTET STRING }
/// ```
#[derive(Clone, Debug)]
pub struct MessageImprint {
    pub hash_algorithm: AlgorithmIdentifier,
    pub hashed_message: OctetString,
}

impl MessageImprint {
    pub fn take_from<S: Source>(cons: &mut Constructed<S>) -> Result<Self, DecodeError<S::Error>> {
        cons.take_sequence(|cons| {
            let hash_algorithm = AlgorithmIdentifier::take_from(cons)?;
            let hashed_message = OctetString::take_from(cons)?;

            Ok(Self {
                hash_algorithm,
                hashed_message,
            })
        })
    }
}

/// An algorithm OID; any parameters are consumed without being interpreted.
#[derive(Clone, Debug)]
pub struct AlgorithmIdentifier {
    pub algorithm: Oid,
}

impl AlgorithmIdentifier {
    pub fn take_from<S: Source>(cons: &mut Constructed<S>) -> Result<Self, DecodeError<S::Error>> {
        cons.take_sequence(|cons| {
            let algorithm = Oid::take_from(cons)?;
            let _params = cons.capture_all()?;

            Ok(Self { algorithm })
        })
    }
}

/// A GeneralizedTime value, kept as its raw DER capture.
#[derive(Clone, Debug)]
pub struct GeneralizedTime(Captured);

impl GeneralizedTime {
    pub fn take_from<S: Source>(cons: &mut Constructed<S>) -> Result<Self, DecodeError<S::Error>> {
        cons.capture_one().map(GeneralizedTime)
    }

    /// The time string (`YYYYMMDDHHMMSS[.f*]Z`), or an empty string if the
    /// captured value is not a short-form UTF-8 primitive.
    pub fn as_str(&self) -> &str {
        match self.0.as_slice() {
            [_, len, content @ ..] if (*len as usize) == content.len() && *len < 128 => {
                std::str::from_utf8(content).unwrap_or("")
            }
            _ => "",
        }
    }
}
