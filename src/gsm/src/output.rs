// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::{Error, Result};
use std::io::Write;

/// Writes the raw payload followed by a single newline.
pub fn write_payload<W: Write>(out: &mut W, payload: &[u8]) -> Result<()> {
    out.write_all(payload).map_err(Error::output)?;
    out.write_all(b"\n").map_err(Error::output)?;
    out.flush().map_err(Error::output)
}
