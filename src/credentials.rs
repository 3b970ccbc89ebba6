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

/// Account credentials for the PSC World service.
///
/// Set once at client construction and injected into every outbound
/// request as the `usuario` and `password` parameters.
#[derive(Clone, Debug)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Create a credential pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The account username.
    pub fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }

    /// Return a copy of `params` with the credential parameters added.
    ///
    /// The caller's map is left untouched. If it already contains a
    /// `usuario` or `password` key, the stored credential value wins.
    pub(crate) fn authenticate(
        &self,
        params: &BTreeMap<String, String>,
    ) -> BTreeMap<String, String> {
        let mut request = params.clone();

        request.insert("usuario".to_string(), self.username.clone());
        request.insert("password".to_string(), self.password.clone());

        request
    }
}
