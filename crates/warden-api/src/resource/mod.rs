// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Resource identifier extraction.
//!
//! Authorization decisions are made against a resource identifier (a KRN such
//! as `krn:wallet:1234:1234`). Routes declare where that identifier lives with
//! a descriptor:
//!
//! | Descriptor       | Resolved from                          |
//! |------------------|----------------------------------------|
//! | `*`, `krn:...`   | the descriptor itself                  |
//! | `${body:name}`   | string field `name` of the JSON body   |
//! | `${query:name}`  | first value of query parameter `name`  |
//! | `${header:name}` | first value of header `name`           |
//!
//! An `x-krn` request header overrides every descriptor.

mod descriptor;
mod error;
mod extract;

pub use descriptor::{ResourceDescriptor, ResourceSource};
pub use error::{ExtractError, ExtractResult};
pub use extract::{extract_resource, ResourceExtractor, DEFAULT_BODY_LIMIT, RESOURCE_OVERRIDE_HEADER};
