//! Map-backed [`JournalStore`] for tests and dry runs.

use std::collections::BTreeMap;

use super::types::{
    Entry, EntryQuery, EntryUpdate, MemoryItem, MemoryItemUpdate, MemoryStats, NewMemoryItem,
    NewPrinciple, Principle, SaveSummary, User,
};
use super::{new_id, JournalStore, StoreError, StoreResult};
use crate::entities::EntityType;
use crate::personality::PersonalityProfile;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: BTreeMap<String, User>,
    entries: BTreeMap<String, Entry>,
    memory_items: Vec<MemoryItem>,
    principles: Vec<Principle>,
    failure: Option<String>,
    rejected_name: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_user(&mut self, user: User) {
        self.users.insert(user.id.clone(), user);
    }

    /// Every subsequent call fails with [`StoreError::Backend`] carrying `message`.
    pub fn fail_with(&mut self, message: impl Into<String>) {
        self.failure = Some(message.into());
    }

    /// Inserting a memory item named `name` fails with [`StoreError::Backend`].
    pub fn reject_memory_item(&mut self, name: impl Into<String>) {
        self.rejected_name = Some(name.into());
    }

    pub fn memory_items(&self) -> &[MemoryItem] {
        &self.memory_items
    }

    fn check(&self) -> StoreResult<()> {
        match &self.failure {
            Some(message) => Err(StoreError::Backend(message.clone())),
            None => Ok(()),
        }
    }

    fn new_memory_item(&self, item: &NewMemoryItem) -> StoreResult<MemoryItem> {
        if self.rejected_name.as_deref() == Some(item.name.as_str()) {
            return Err(StoreError::Backend(format!("insert rejected: {}", item.name)));
        }
        Ok(MemoryItem {
            id: new_id(),
            user_id: item.user_id.clone(),
            name: item.name.clone(),
            item_type: item.item_type,
            context: item.context.clone(),
            sentiment: item.sentiment,
            mention_count: 1,
            last_mentioned: item.last_mentioned.clone(),
            created_at: item.last_mentioned.clone(),
        })
    }
}

fn same_key(item: &MemoryItem, user_id: &str, name: &str, item_type: EntityType) -> bool {
    item.user_id == user_id && item.name == name && item.item_type == item_type
}

impl JournalStore for InMemoryStore {
    fn get_user(&self, user_id: &str) -> StoreResult<Option<User>> {
        self.check()?;
        Ok(self.users.get(user_id).cloned())
    }

    fn update_user_profile(
        &mut self,
        user_id: &str,
        profile: &PersonalityProfile,
        onboarded: bool,
    ) -> StoreResult<()> {
        self.check()?;
        let user = self
            .users
            .get_mut(user_id)
            .ok_or_else(|| StoreError::not_found("user", user_id))?;
        user.personality_profile = Some(profile.clone());
        user.onboarded = onboarded;
        Ok(())
    }

    fn get_entry(&self, entry_id: &str) -> StoreResult<Option<Entry>> {
        self.check()?;
        Ok(self.entries.get(entry_id).cloned())
    }

    fn insert_entry(&mut self, entry: &Entry) -> StoreResult<()> {
        self.check()?;
        if self.entries.contains_key(&entry.id) {
            return Err(StoreError::Backend(format!("duplicate entry id: {}", entry.id)));
        }
        self.entries.insert(entry.id.clone(), entry.clone());
        Ok(())
    }

    fn list_entries(&self, user_id: &str, query: &EntryQuery) -> StoreResult<Vec<Entry>> {
        self.check()?;
        let mut entries: Vec<Entry> = self
            .entries
            .values()
            .filter(|e| e.user_id == user_id && query.matches(e))
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
        Ok(entries
            .into_iter()
            .skip(query.offset)
            .take(query.limit)
            .collect())
    }

    fn update_entry(&mut self, entry_id: &str, update: &EntryUpdate) -> StoreResult<()> {
        self.check()?;
        let entry = self
            .entries
            .get_mut(entry_id)
            .ok_or_else(|| StoreError::not_found("entry", entry_id))?;
        entry.title = update.title.clone();
        entry.content = update.content.clone();
        entry.word_count = update.word_count;
        entry.updated_at = super::timestamp(chrono::Utc::now());
        Ok(())
    }

    fn find_memory_item(
        &self,
        user_id: &str,
        name: &str,
        item_type: EntityType,
    ) -> StoreResult<Option<MemoryItem>> {
        self.check()?;
        Ok(self
            .memory_items
            .iter()
            .find(|i| same_key(i, user_id, name, item_type))
            .cloned())
    }

    fn insert_memory_item(&mut self, item: &NewMemoryItem) -> StoreResult<String> {
        self.check()?;
        if self.find_memory_item(&item.user_id, &item.name, item.item_type)?.is_some() {
            return Err(StoreError::Backend(format!(
                "duplicate memory item: {} ({})",
                item.name, item.item_type
            )));
        }
        let stored = self.new_memory_item(item)?;
        let id = stored.id.clone();
        self.memory_items.push(stored);
        Ok(id)
    }

    fn update_memory_item(&mut self, id: &str, update: &MemoryItemUpdate) -> StoreResult<()> {
        self.check()?;
        let item = self
            .memory_items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| StoreError::not_found("memory item", id))?;
        item.context = update.context.clone();
        item.sentiment = update.sentiment;
        item.mention_count = update.mention_count;
        item.last_mentioned = update.last_mentioned.clone();
        Ok(())
    }

    fn record_mentions(&mut self, mentions: &[NewMemoryItem]) -> StoreResult<SaveSummary> {
        self.check()?;
        let mut summary = SaveSummary::default();
        // Staged copy, swapped in only when every mention applied.
        let mut staged = self.memory_items.clone();
        for mention in mentions {
            let existing = staged
                .iter_mut()
                .find(|i| same_key(i, &mention.user_id, &mention.name, mention.item_type));
            match existing {
                Some(item) => {
                    item.context = mention.context.clone();
                    item.sentiment = mention.sentiment;
                    item.mention_count += 1;
                    item.last_mentioned = mention.last_mentioned.clone();
                    summary.updated += 1;
                }
                None => {
                    staged.push(self.new_memory_item(mention)?);
                    summary.inserted += 1;
                }
            }
        }
        self.memory_items = staged;
        Ok(summary)
    }

    fn recent_memory_items(&self, user_id: &str, limit: usize) -> StoreResult<Vec<MemoryItem>> {
        self.check()?;
        let mut items: Vec<MemoryItem> = self
            .memory_items
            .iter()
            .filter(|i| i.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| {
            b.last_mentioned
                .cmp(&a.last_mentioned)
                .then_with(|| b.id.cmp(&a.id))
        });
        items.truncate(limit);
        Ok(items)
    }

    fn memory_stats(&self, user_id: &str) -> StoreResult<MemoryStats> {
        self.check()?;
        let mut stats = MemoryStats::default();
        for item in self.memory_items.iter().filter(|i| i.user_id == user_id) {
            stats.total_items += 1;
            stats.total_mentions += u64::from(item.mention_count);
            *stats
                .by_type
                .entry(item.item_type.as_str().to_string())
                .or_default() += 1;

            if stats.oldest_item.as_ref().map_or(true, |o| item.created_at < *o) {
                stats.oldest_item = Some(item.created_at.clone());
            }
            if stats.last_mentioned.as_ref().map_or(true, |l| item.last_mentioned > *l) {
                stats.last_mentioned = Some(item.last_mentioned.clone());
            }
        }
        Ok(stats)
    }

    fn insert_principle(&mut self, principle: &NewPrinciple) -> StoreResult<Principle> {
        self.check()?;
        let stored = Principle {
            id: new_id(),
            user_id: principle.user_id.clone(),
            title: principle.title.clone(),
            description: principle.description.clone(),
            category: principle.category,
            examples: principle.examples.clone(),
            priority: principle.priority,
            created_at: principle.created_at.clone(),
        };
        self.principles.push(stored.clone());
        Ok(stored)
    }

    fn list_principles(&self, user_id: &str) -> StoreResult<Vec<Principle>> {
        self.check()?;
        let mut principles: Vec<Principle> = self
            .principles
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        principles.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then_with(|| a.created_at.cmp(&b.created_at))
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(principles)
    }

    fn delete_principle(&mut self, user_id: &str, id: &str) -> StoreResult<()> {
        self.check()?;
        let idx = self
            .principles
            .iter()
            .position(|p| p.id == id && p.user_id == user_id)
            .ok_or_else(|| StoreError::not_found("principle", id))?;
        self.principles.remove(idx);
        Ok(())
    }
}
