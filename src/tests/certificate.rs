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

use crate::{Certificate, Issuer, RootAuthority};

pub(crate) const INVALID_XML: &str = "<constancia><esValida>false</esValida></constancia>";

pub(crate) const VALID_XML: &str = concat!(
    "<constancia>",
    "<esValida>true</esValida>",
    "<emisor organizacion=\"PSC World S.A.\" oid=\"2.16.484.101.10.316\" ",
    "certificado=\"TUlJQ2VqQ0NBZU9n\">PSC World CA</emisor>",
    "<raiz organizacion=\"Secretaria de Economia\" ",
    "certificado=\"TUlJRGtEQ0NBbmln\">Autoridad Raiz</raiz>",
    "</constancia>"
);

#[test]
fn invalid_result_has_no_authorities() {
    let certificate = Certificate::from_xml(INVALID_XML).unwrap();

    assert!(!certificate.is_valid());
    assert!(certificate.issuer().is_none());
    assert!(certificate.root().is_none());
}

#[test]
fn valid_result_carries_issuer_and_root() {
    let certificate = Certificate::from_xml(VALID_XML).unwrap();

    assert!(certificate.is_valid());

    let issuer = certificate.issuer().unwrap();
    assert_eq!(issuer.organization(), "PSC World S.A.");
    assert_eq!(issuer.name(), "PSC World CA");
    assert_eq!(issuer.oid(), "2.16.484.101.10.316");
    assert_eq!(issuer.certificate(), "TUlJQ2VqQ0NBZU9n");

    let root = certificate.root().unwrap();
    assert_eq!(root.organization(), "Secretaria de Economia");
    assert_eq!(root.name(), "Autoridad Raiz");
    assert_eq!(root.certificate(), "TUlJRGtEQ0NBbmln");
}

#[test]
fn garbage_payload_is_a_parsing_error() {
    assert!(Certificate::from_xml("not xml at all").is_err());
}

#[test]
fn xml_round_trip_preserves_every_field() {
    let original = Certificate::new(
        true,
        Some(Issuer::new(
            "PSC World S.A.",
            "PSC World CA",
            "2.16.484.101.10.316",
            "TUlJQ2VqQ0NBZU9n",
        )),
        Some(RootAuthority::new(
            "Secretaria de Economia",
            "Autoridad Raiz",
            "TUlJRGtEQ0NBbmln",
        )),
    );

    let xml = original.to_xml().unwrap();
    let reparsed = Certificate::from_xml(&xml).unwrap();

    assert_eq!(original, reparsed);
}

#[test]
fn negative_round_trip() {
    let original = Certificate::new(false, None, None);

    let xml = original.to_xml().unwrap();
    assert_eq!(Certificate::from_xml(&xml).unwrap(), original);
}
