//! Article list state shared by the public feed and the admin panel.
//!
//! DESIGN
//! ======
//! Every mutation builds a fresh list and swaps it in, so a single
//! `RwSignal::update` publishes one consistent snapshot to both views.

#[cfg(test)]
#[path = "articles_test.rs"]
mod articles_test;

use serde::{Deserialize, Serialize};

/// A titled text record shown in the feed and managed in admin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub body: String,
}

/// Ordered article list. New records are prepended.
#[derive(Clone, Debug, Default)]
pub struct ArticlesState {
    pub items: Vec<Article>,
}

impl ArticlesState {
    pub fn contains(&self, id: i64) -> bool {
        self.items.iter().any(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Pick an id for a locally created record.
    ///
    /// Starts from the wall-clock millisecond value and steps past any id
    /// already in the list.
    pub fn next_id(&self, now_ms: i64) -> i64 {
        let mut id = now_ms;
        while self.contains(id) {
            id += 1;
        }
        id
    }

    /// Prepend a new record and return its id.
    pub fn create(&mut self, title: &str, body: &str, now_ms: i64) -> i64 {
        let id = self.next_id(now_ms);
        let mut next = Vec::with_capacity(self.items.len() + 1);
        next.push(Article { id, title: title.to_owned(), body: body.to_owned() });
        next.extend(self.items.iter().cloned());
        self.items = next;
        id
    }

    /// Overwrite title and body of the record matching `id`.
    ///
    /// Returns `false` without touching the list when no record matches.
    pub fn replace(&mut self, id: i64, title: &str, body: &str) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.items = self
            .items
            .iter()
            .map(|a| {
                if a.id == id {
                    Article { id, title: title.to_owned(), body: body.to_owned() }
                } else {
                    a.clone()
                }
            })
            .collect();
        true
    }

    /// Remove the record matching `id`. Missing ids are a no-op.
    pub fn delete(&mut self, id: i64) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.items = self.items.iter().filter(|a| a.id != id).cloned().collect();
        true
    }

    /// Merge the remote feed into the list.
    ///
    /// Records already present (created locally before the fetch resolved)
    /// keep their place at the front; fetched records follow, skipping ids
    /// that already exist.
    pub fn seed(&mut self, fetched: Vec<Article>) {
        let mut next = self.items.clone();
        for article in fetched {
            if !next.iter().any(|a| a.id == article.id) {
                next.push(article);
            }
        }
        self.items = next;
    }
}
