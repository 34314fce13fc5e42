// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The module for key-value pairs attached to a log event.

use value_bag::ValueBag;

/// Represents a value in a key-value pair.
pub type Value<'a> = ValueBag<'a>;

/// Represents a key in a key-value pair.
///
/// Keys are unique within one event; uniqueness is the producer's invariant.
#[derive(Debug, Clone, Copy)]
pub struct Key<'a>(&'a str);

impl<'a> Key<'a> {
    /// Create a key from a string.
    pub fn new(key: &'a str) -> Self {
        Key(key)
    }

    /// Gets the key string.
    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

impl PartialEq for Key<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Key<'_> {}

/// The key-value pairs of one log event, borrowed from the producer.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyValues<'a> {
    pairs: &'a [(Key<'a>, Value<'a>)],
}

impl<'a> KeyValues<'a> {
    /// The number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over the pairs in producer order.
    pub fn iter(&self) -> impl Iterator<Item = &'a (Key<'a>, Value<'a>)> {
        self.pairs.iter()
    }
}

impl<'a> From<&'a [(Key<'a>, Value<'a>)]> for KeyValues<'a> {
    fn from(pairs: &'a [(Key<'a>, Value<'a>)]) -> Self {
        KeyValues { pairs }
    }
}
