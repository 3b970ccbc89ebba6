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

//! ASN.1 types defined by [RFC 5652] (Cryptographic Message Syntax).
//!
//! [RFC 5652]: https://datatracker.ietf.org/doc/html/rfc5652

use bcder::{
    decode::{Constructed, DecodeError, Source},
    Captured, ConstOid, Integer, OctetString, Oid, Tag,
};

/// Content type OID for CMS signed data.
///
/// 1.2.840.113549.1.7.2
pub const OID_ID_SIGNED_DATA: ConstOid = Oid(&[42, 134, 72, 134, 247, 13, 1, 7, 2]);

/// A CMS content wrapper.
///
/// ```ASN.1
/// ContentInfo ::= SEQUENCE {
///     contentType ContentType,
///     content [0] EXPLICIT ANY DEFINED BY contentType }
/// ```
#[derive(Clone, Debug)]
pub struct ContentInfo {
    pub content_type: Oid,
    pub content: Captured,
}

impl ContentInfo {
    pub fn take_from<S: Source>(cons: &mut Constructed<S>) -> Result<Self, DecodeError<S::Error>> {
        cons.take_sequence(Self::from_sequence)
    }

    pub fn take_opt_from<S: Source>(
        cons: &mut Constructed<S>,
    ) -> Result<Option<Self>, DecodeError<S::Error>> {
        cons.take_opt_sequence(Self::from_sequence)
    }

    fn from_sequence<S: Source>(cons: &mut Constructed<S>) -> Result<Self, DecodeError<S::Error>> {
        let content_type = Oid::take_from(cons)?;
        let content = cons.take_constructed_if(Tag::CTX_0, |cons| cons.capture_all())?;

        Ok(Self {
            content_type,
            content,
        })
    }
}

/// CMS signed data, reduced to the fields this crate reads. The digest
/// algorithm set and everything after the encapsulated content (certificate
/// list, CRLs, signer infos) are consumed but kept unparsed.
///
/// ```ASN.1
/// SignedData ::= SEQUENCE {
///     version CMSVersion,
///     digestAlgorithms DigestAlgorithmIdentifiers,
///     encapContentInfo EncapsulatedContentInfo,
///     certificates [0] IMPLICIT CertificateSet OPTIONAL,
///     crls [1] IMPLICIT RevocationInfoChoices OPTIONAL,
///     signerInfos SignerInfos }
/// ```
#[derive(Clone, Debug)]
pub struct SignedData {
    pub content_info: EncapsulatedContentInfo,
}

impl SignedData {
    pub fn take_from<S: Source>(cons: &mut Constructed<S>) -> Result<Self, DecodeError<S::Error>> {
        cons.take_sequence(|cons| {
            let _version = Integer::take_from(cons)?;
            let _digest_algorithms = cons.take_constructed_if(Tag::SET, |cons| cons.capture_all())?;
            let content_info = EncapsulatedContentInfo::take_from(cons)?;
            let _rest = cons.capture_all()?;

            Ok(Self { content_info })
        })
    }
}

/// The content a CMS signature covers.
///
/// ```ASN.1
/// EncapsulatedContentInfo ::= SEQUENCE {
///     eContentType ContentType,
///     eContent [0] EXPLICIT OCTET STRING OPTIONAL }
/// ```
#[derive(Clone, Debug)]
pub struct EncapsulatedContentInfo {
    pub content_type: Oid,
    pub content: Option<OctetString>,
}

impl EncapsulatedContentInfo {
    pub fn take_from<S: Source>(cons: &mut Constructed<S>) -> Result<Self, DecodeError<S::Error>> {
        cons.take_sequence(|cons| {
            let content_type = Oid::take_from(cons)?;
            let content = cons.take_opt_constructed_if(Tag::CTX_0, OctetString::take_from)?;

            Ok(Self {
                content_type,
                content,
            })
        })
    }
}
