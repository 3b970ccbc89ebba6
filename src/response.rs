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

use crate::{error::RemoteError, Credentials, Result};

/// Marks a coded failure in an otherwise plain-text result.
const ERROR_PREFIX: &str = "ERROR: ";

/// Interpret the raw textual result of a service operation.
///
/// A result starting with `ERROR: ` carries a failure code and becomes the
/// corresponding [`RemoteError`]; anything else is the success payload and
/// is returned verbatim. No trimming or reshaping happens here; the
/// payload may be a certificate blob or an XML document, and its meaning is
/// the caller's business.
pub(crate) fn interpret(raw: String, credentials: &Credentials) -> Result<String> {
    match raw.strip_prefix(ERROR_PREFIX) {
        Some(code) => Err(RemoteError::from_code(
            code,
            credentials.username(),
            credentials.password(),
        )
        .into()),
        None => Ok(raw),
    }
}
