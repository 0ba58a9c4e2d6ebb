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

use crate::encode::percent_encode;

/// An insertion ordered, multi-valued parameter table.
///
/// The insertion order is what the authorization header is serialized in. The signature
/// never depends on it: [`ParameterTable::normalize`] works on a sorted copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterTable {
    entries: Vec<(String, Vec<String>)>,
}

impl ParameterTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to the single value `value`.
    ///
    /// An existing key keeps its position and loses its previous values.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.set(key.into(), vec![value.into()]);
    }

    /// Append `value` to the values of `key`, adding the key at the end if it is new.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, values)) => values.push(value.into()),
            None => self.entries.push((key, vec![value.into()])),
        }
    }

    /// Mark `key` as a flag parameter: present, but without any value.
    pub fn insert_flag(&mut self, key: impl Into<String>) {
        self.set(key.into(), Vec::new());
    }

    /// The first value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_all(key)?.first().map(String::as_str)
    }

    /// All values of `key`, empty for a flag parameter.
    pub fn get_all(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, values)| values.as_slice())
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(k, values)| (k.as_str(), values.as_slice()))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge a raw query string (without the leading `?`) into the table.
    ///
    /// The query is split on `&`, and each segment on `=`. Only the text between the
    /// first and second `=` is kept as the value, so `a=b=c` yields `a` -> `b`. A segment
    /// without `=` is a flag parameter and replaces any values already collected for its
    /// key. Nothing is percent decoded.
    pub fn merge_query(&mut self, query: &str) {
        for segment in query.split('&') {
            let mut pieces = segment.split('=');
            let key = pieces.next().unwrap_or_default();

            match pieces.next() {
                Some(value) => self.append(key, value),
                None => self.insert_flag(key),
            }
        }
    }

    /// Build the [normalized parameter string](https://datatracker.ietf.org/doc/html/rfc5849#section-3.4.1.3.2).
    ///
    /// Keys are sorted bytewise. For every key the values are percent encoded, sorted and
    /// written as `key=value` joined by `&`; key groups are joined by `&` as well. A flag
    /// parameter contributes an empty group, which shows up as `&&` between its
    /// neighbours.
    pub fn normalize(&self) -> String {
        let mut sorted: Vec<&(String, Vec<String>)> = self.entries.iter().collect();
        sorted.sort_by(|(l, _), (r, _)| l.cmp(r));

        sorted
            .into_iter()
            .map(|(key, values)| {
                let mut encoded: Vec<String> = values.iter().map(|v| percent_encode(v)).collect();
                encoded.sort();
                encoded
                    .iter()
                    .map(|v| format!("{key}={v}"))
                    .collect::<Vec<_>>()
                    .join("&")
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    fn set(&mut self, key: String, values: Vec<String>) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = values,
            None => self.entries.push((key, values)),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParameterTable {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (k, v) in iter {
            table.append(k, v);
        }
        table
    }
}
