// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Query parameters used by the marketplace API.
pub const ACTION: &str = "Action";
pub const ACCESS_KEY_ID: &str = "AWSAccessKeyId";
pub const SELLER_ID: &str = "SellerId";
pub const MERCHANT: &str = "Merchant";
pub const SIGNATURE_VERSION: &str = "SignatureVersion";
pub const SIGNATURE_METHOD: &str = "SignatureMethod";
pub const VERSION: &str = "Version";
pub const TIMESTAMP: &str = "Timestamp";
pub const SIGNATURE: &str = "Signature";

// Fixed values of the signature scheme.
pub const SIGNATURE_VERSION_2: &str = "2";
pub const HMAC_SHA256: &str = "HmacSHA256";

// API version used for actions without a versioned path (the reporting
// endpoints).
pub const DEFAULT_VERSION: &str = "2009-01-01";

/// AsciiSet for query escaping the base64 signature value.
///
/// - Percent-encode every byte except the unreserved characters:
///   'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
pub static QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
