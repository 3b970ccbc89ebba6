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

//! Decode-only ASN.1 views of the structures embedded in a PSC World
//! certificate.
//!
//! Only the field paths this crate actually reads are modeled; everything
//! else inside a structure is captured unparsed and ignored.

pub(crate) mod rfc3161;
pub(crate) mod rfc5652;
