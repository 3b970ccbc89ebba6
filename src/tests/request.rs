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

use std::collections::BTreeMap;

use crate::Credentials;

fn params(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn adds_credentials() {
    let credentials = Credentials::new("test", "secret");
    let operation_params = params(&[("identificador", "1234")]);

    let request = credentials.authenticate(&operation_params);

    assert_eq!(
        request,
        params(&[
            ("identificador", "1234"),
            ("usuario", "test"),
            ("password", "secret"),
        ])
    );
}

#[test]
fn leaves_caller_map_untouched() {
    let credentials = Credentials::new("test", "secret");
    let operation_params = params(&[("hash", "abcd")]);

    let _ = credentials.authenticate(&operation_params);

    assert_eq!(operation_params, params(&[("hash", "abcd")]));
}

#[test]
fn stored_credentials_win_over_caller_keys() {
    let credentials = Credentials::new("real-user", "real-password");
    let operation_params = params(&[("usuario", "impostor"), ("password", "bogus")]);

    let request = credentials.authenticate(&operation_params);

    assert_eq!(request.get("usuario").map(String::as_str), Some("real-user"));
    assert_eq!(
        request.get("password").map(String::as_str),
        Some("real-password")
    );
}
