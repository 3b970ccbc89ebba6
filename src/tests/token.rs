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

use crate::{hash::sha256, tests::fixtures, Error, TimeStampToken};

#[test]
fn decodes_a_full_response() {
    let digest = sha256(b"1234");
    let der = fixtures::time_stamp_response(&digest);

    let token = TimeStampToken::from_der(&der).unwrap();

    assert_eq!(token.hashed_message(), digest.to_vec());
    assert_eq!(token.gen_time(), "20240101120000Z");
    assert!(token.is_sha256());
}

#[test]
fn decodes_a_bare_token() {
    let digest = sha256(b"some preserved document");
    let der = fixtures::time_stamp_token(&digest);

    let token = TimeStampToken::from_der(&der).unwrap();
    assert_eq!(token.hashed_message(), digest.to_vec());
}

#[test]
fn rejects_garbage() {
    match TimeStampToken::from_der(b"\x00\x01\x02\x03") {
        Err(Error::DecodeError(_)) => {}
        other => panic!("expected a decode error, got {other:?}"),
    }
}

#[test]
fn rejects_a_response_without_a_token() {
    let der = fixtures::rejected_response();

    match TimeStampToken::from_der(&der) {
        Err(Error::DecodeError(message)) => {
            assert!(message.contains("rejected"), "unexpected message: {message}");
        }
        other => panic!("expected a decode error, got {other:?}"),
    }
}

#[test]
fn rejects_a_token_with_the_wrong_content_type() {
    // A ContentInfo whose contentType is id-data (1.2.840.113549.1.7.1)
    // rather than signedData.
    let content_type = fixtures::tlv(0x06, &[42, 134, 72, 134, 247, 13, 1, 7, 1]);
    let content = fixtures::tlv(0xa0, &fixtures::tlv(0x30, &[]));
    let der = fixtures::tlv(0x30, &[content_type, content].concat());

    match TimeStampToken::from_der(&der) {
        Err(Error::DecodeError(message)) => {
            assert!(message.contains("OID"), "unexpected message: {message}");
        }
        other => panic!("expected a decode error, got {other:?}"),
    }
}
