// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Generic filter/sort/paginate pipeline over workload resource lists.

use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Pod;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;
use std::cmp::Ordering;

/// Uniform view over a workload resource for generic selection:
/// a name to filter on and a creation time to sort by.
pub trait DataCell {
    fn name(&self) -> &str;
    fn creation_timestamp(&self) -> Option<&Time>;
}

impl DataCell for Pod {
    fn name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or("")
    }

    fn creation_timestamp(&self) -> Option<&Time> {
        self.metadata.creation_timestamp.as_ref()
    }
}

impl DataCell for Deployment {
    fn name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or("")
    }

    fn creation_timestamp(&self) -> Option<&Time> {
        self.metadata.creation_timestamp.as_ref()
    }
}

/// In-memory selection pipeline: filter, then sort, then paginate.
/// Never touches the Kubernetes API.
pub struct DataSelector<T> {
    items: Vec<T>,
}

impl<T: DataCell> DataSelector<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Keep items whose name contains the query substring. An empty query keeps everything.
    pub fn filter(mut self, name: &str) -> Self {
        if name.is_empty() {
            return self;
        }
        self.items.retain(|item| item.name().contains(name));
        self
    }

    /// Order by creation time, newest first. Items without a creation
    /// timestamp sort last; ties keep their list order.
    pub fn sort(mut self) -> Self {
        self.items
            .sort_by(|a, b| match (a.creation_timestamp(), b.creation_timestamp()) {
                (Some(a), Some(b)) => b.0.cmp(&a.0),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
        self
    }

    /// Item count at the current stage. Callers take this after filtering to
    /// report the pre-pagination total.
    pub fn total(&self) -> usize {
        self.items.len()
    }

    /// Keep the 1-based `page` of `limit` items. A `limit` or `page` of zero
    /// disables pagination; a page past the end yields an empty slice.
    pub fn paginate(mut self, limit: usize, page: usize) -> Self {
        if limit < 1 || page < 1 {
            return self;
        }
        let start = ((page - 1) * limit).min(self.items.len());
        let end = (page * limit).min(self.items.len());
        self.items.truncate(end);
        self.items.drain(..start);
        self
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}
