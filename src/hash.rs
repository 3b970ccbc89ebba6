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

//! Hash convenience functions.

use std::io::{Read, Seek, SeekFrom};

use sha2::{Digest, Sha256};

const HASH_BUF_SIZE: usize = 8192;

/// Given a byte slice, return the SHA-256 hash of that content.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Return the SHA-256 hash of everything in `data`, reading in bounded
/// chunks so arbitrarily large streams never materialize in memory.
///
/// The stream is rewound to its start first; callers may already have
/// consumed part of it.
pub fn sha256_stream<R: Read + Seek + ?Sized>(data: &mut R) -> crate::Result<[u8; 32]> {
    data.seek(SeekFrom::Start(0))?;

    let mut hasher = Sha256::new();
    let mut buf = [0u8; HASH_BUF_SIZE];

    loop {
        let read = data.read(&mut buf)?;
        if read == 0 {
            break;
        }
        hasher.update(&buf[..read]);
    }

    Ok(hasher.finalize().into())
}
