use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use dashmap::DashMap;

use engram_core::constants::SYSTEM_ACTOR;
use engram_core::errors::{EngramResult, LifecycleError};
use engram_core::memory::{
    MemoryDraft, MemoryObject, MemoryStatus, ProvenanceAction, ProvenanceEntry, Score,
};
use engram_core::models::audit::AuditEntry;
use engram_core::models::namespace::NamespaceKey;
use engram_core::traits::{ContentValidator, MemoryFilter, MemoryStore};

use crate::edit::MemoryUpdates;
use crate::expiry::ExpiryReport;
use crate::merge::MergeOptions;

/// Which partition a memory was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Partition {
    Primary,
    Quarantine,
}

/// The lifecycle state machine.
///
/// Exclusively mutates memory objects; the store only persists what it is
/// given. Mutations to the same memory id are serialized through a per-id
/// mutex, and primary-partition writes go through the store's
/// version-checked update, so concurrent edits cannot silently lose a
/// version bump.
pub struct LifecycleManager<S: MemoryStore, V: ContentValidator> {
    store: Arc<S>,
    validator: V,
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl<S: MemoryStore, V: ContentValidator> LifecycleManager<S, V> {
    pub fn new(store: Arc<S>, validator: V) -> Self {
        Self {
            store,
            validator,
            locks: DashMap::new(),
        }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    fn lock_handle(&self, id: &str) -> Arc<Mutex<()>> {
        self.locks
            .entry(id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Fetch from either partition, with where it was found.
    fn fetch(&self, id: &str) -> EngramResult<Option<(MemoryObject, Partition)>> {
        if let Some(memory) = self.store.get_memory(id)? {
            return Ok(Some((memory, Partition::Primary)));
        }
        if let Some(memory) = self.store.get_quarantined(id)? {
            return Ok(Some((memory, Partition::Quarantine)));
        }
        Ok(None)
    }

    fn fetch_mutable(&self, id: &str, action: &'static str) -> EngramResult<(MemoryObject, Partition)> {
        let (memory, partition) = self.fetch(id)?.ok_or(LifecycleError::NotFound {
            memory_id: id.to_string(),
        })?;
        if memory.status == MemoryStatus::Deleted {
            return Err(LifecycleError::InvalidTransition {
                memory_id: id.to_string(),
                status: memory.status,
                action,
            }
            .into());
        }
        Ok((memory, partition))
    }

    /// Persist a mutated memory back to the partition it came from.
    ///
    /// Primary writes are version-checked against the version the mutation
    /// started from; quarantine writes rely on the per-id lock alone. A
    /// quarantined memory resides in both partitions, so a primary write
    /// also refreshes the quarantine copy; promotion must never read stale
    /// state.
    fn persist(
        &self,
        memory: &MemoryObject,
        partition: Partition,
        prior_version: u64,
    ) -> EngramResult<()> {
        match partition {
            Partition::Primary => {
                self.store.update_with_version_check(memory, prior_version)?;
                if memory.status == MemoryStatus::Quarantined {
                    self.store.save_quarantined(memory)?;
                }
                Ok(())
            }
            Partition::Quarantine => self.store.save_quarantined(memory),
        }
    }

    /// Best-effort audit write. A logging failure is reported but never
    /// rolls back the lifecycle mutation that triggered it.
    fn audit(
        &self,
        namespace: &NamespaceKey,
        action: &str,
        resource_id: &str,
        actor: &str,
        metadata: serde_json::Value,
    ) {
        let entry = AuditEntry::new(namespace.clone(), action, resource_id, actor, metadata);
        if let Err(e) = self.store.log_audit(&entry) {
            tracing::warn!(resource_id, action, error = %e, "audit log write failed");
        }
    }

    /// Create a memory from a draft.
    ///
    /// The validation collaborator decides confidence and anomaly flags; a
    /// flagged draft lands in the quarantine partition, everything else goes
    /// straight to primary. Only validation rejection can fail this.
    pub fn create(&self, draft: MemoryDraft, actor: &str) -> EngramResult<MemoryObject> {
        let ingestion = self.validator.validate(&draft)?;
        let quarantined = ingestion.quarantined;
        let now = Utc::now();

        let memory = MemoryObject {
            memory_id: uuid::Uuid::new_v4().to_string(),
            namespace: draft.namespace,
            content_hash: MemoryObject::compute_content_hash(&draft.content),
            content: draft.content,
            content_type: draft.content_type,
            source: draft.source,
            ingestion,
            provenance: vec![ProvenanceEntry::new(ProvenanceAction::Created, actor).with_version(1)],
            tags: draft.tags,
            importance: draft.importance,
            task_criticality: draft.task_criticality,
            embedding: draft.embedding,
            created_at: now,
            last_accessed_at: None,
            ttl_seconds: draft.ttl_seconds,
            expires_at: draft.expires_at,
            checkpoint_refs: Vec::new(),
            version: 1,
            previous_versions: Vec::new(),
            status: if quarantined {
                MemoryStatus::Quarantined
            } else {
                MemoryStatus::Active
            },
            session_id: draft.session_id,
            accessed_in_sessions: BTreeSet::new(),
            cross_session_recall_count: 0,
        };

        if quarantined {
            self.store.save_quarantined(&memory)?;
        } else {
            self.store.save_memory(&memory)?;
        }
        self.audit(
            &memory.namespace,
            "create",
            &memory.memory_id,
            actor,
            serde_json::json!({ "quarantined": quarantined }),
        );
        tracing::debug!(memory_id = %memory.memory_id, quarantined, "memory created");
        Ok(memory)
    }

    /// Apply a partial edit. Snapshots the pre-edit state into version
    /// history, bumps the version by exactly 1, appends an `Edited` entry
    /// carrying the pre-edit content.
    pub fn edit(
        &self,
        id: &str,
        updates: MemoryUpdates,
        actor: &str,
        reason: Option<&str>,
    ) -> EngramResult<MemoryObject> {
        let handle = self.lock_handle(id);
        let _guard = handle.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let (mut memory, partition) = self.fetch_mutable(id, "edit")?;
        if updates.is_empty() {
            return Ok(memory);
        }

        let prior_version = memory.version;
        let previous_content = memory.content.clone();
        memory.previous_versions.push(memory.snapshot(actor, reason));

        if let Some(content) = updates.content {
            memory.content_hash = MemoryObject::compute_content_hash(&content);
            memory.content = content;
        }
        if let Some(content_type) = updates.content_type {
            memory.content_type = content_type;
        }
        if let Some(tags) = updates.tags {
            memory.tags = tags;
        }
        if let Some(importance) = updates.importance {
            memory.importance = importance;
        }
        if let Some(criticality) = updates.task_criticality {
            memory.task_criticality = criticality;
        }
        if let Some(embedding) = updates.embedding {
            memory.embedding = Some(embedding);
        }

        memory.version += 1;
        let mut entry = ProvenanceEntry::new(ProvenanceAction::Edited, actor)
            .with_version(memory.version)
            .with_previous_content(previous_content);
        if let Some(reason) = reason {
            entry = entry.with_reason(reason);
        }
        memory.provenance.push(entry);

        self.persist(&memory, partition, prior_version)?;
        self.audit(
            &memory.namespace,
            "edit",
            id,
            actor,
            serde_json::json!({ "version": memory.version }),
        );
        Ok(memory)
    }

    /// Soft-delete. Content is retained for audit; `Deleted` is terminal.
    pub fn delete(&self, id: &str, actor: &str, reason: &str) -> EngramResult<MemoryObject> {
        let handle = self.lock_handle(id);
        let _guard = handle.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        self.delete_locked(id, actor, reason, ProvenanceAction::Deleted)
    }

    /// Delete body shared with merge/expire, which hold their own locks.
    fn delete_locked(
        &self,
        id: &str,
        actor: &str,
        reason: &str,
        action: ProvenanceAction,
    ) -> EngramResult<MemoryObject> {
        let (memory, partition) = self.fetch(id)?.ok_or(LifecycleError::NotFound {
            memory_id: id.to_string(),
        })?;
        if memory.status == MemoryStatus::Deleted {
            return Err(LifecycleError::AlreadyDeleted {
                memory_id: id.to_string(),
            }
            .into());
        }

        let mut memory = memory;
        let prior_version = memory.version;
        let prior_status = memory.status;
        memory.status = MemoryStatus::Deleted;
        memory
            .provenance
            .push(ProvenanceEntry::new(action, actor).with_reason(reason));

        self.persist(&memory, partition, prior_version)?;
        if prior_status == MemoryStatus::Quarantined && partition == Partition::Primary {
            // The quarantine copy must not outlive the deletion; a later
            // promotion would resurrect it.
            self.store.delete_quarantined(id)?;
        }
        // Deleted is terminal, so the per-id lock has no further work to do.
        self.locks.remove(id);
        self.audit(
            &memory.namespace,
            &action.to_string(),
            id,
            actor,
            serde_json::json!({ "reason": reason }),
        );
        Ok(memory)
    }

    /// Quarantine an active memory in place.
    ///
    /// The object keeps its primary-partition residence but is excluded from
    /// retrieval; a copy lands in the quarantine partition so
    /// [`Self::promote_quarantined`] finds it there.
    pub fn quarantine(&self, id: &str, actor: &str, reason: &str) -> EngramResult<MemoryObject> {
        let handle = self.lock_handle(id);
        let _guard = handle.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let (mut memory, partition) = self.fetch(id)?.ok_or(LifecycleError::NotFound {
            memory_id: id.to_string(),
        })?;
        match memory.status {
            MemoryStatus::Quarantined => {
                return Err(LifecycleError::AlreadyQuarantined {
                    memory_id: id.to_string(),
                }
                .into())
            }
            MemoryStatus::Deleted => {
                return Err(LifecycleError::InvalidTransition {
                    memory_id: id.to_string(),
                    status: memory.status,
                    action: "quarantine",
                }
                .into())
            }
            MemoryStatus::Active => {}
        }

        let prior_version = memory.version;
        memory.status = MemoryStatus::Quarantined;
        memory.ingestion.quarantined = true;
        memory.provenance.push(
            ProvenanceEntry::new(ProvenanceAction::Quarantined, actor).with_reason(reason),
        );

        self.persist(&memory, partition, prior_version)?;
        self.audit(
            &memory.namespace,
            "quarantine",
            id,
            actor,
            serde_json::json!({ "reason": reason }),
        );
        Ok(memory)
    }

    /// Promote a quarantined memory into the primary partition.
    ///
    /// Save-then-delete ordering: a crash in between leaves a duplicate in
    /// both partitions rather than a lost memory, and a retry cleans it up.
    pub fn promote_quarantined(&self, id: &str, actor: &str) -> EngramResult<MemoryObject> {
        let handle = self.lock_handle(id);
        let _guard = handle.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let Some(mut memory) = self.store.get_quarantined(id)? else {
            // Retry after a crash between save and delete: the promotion
            // already landed in primary. Only a memory that actually went
            // through quarantine qualifies.
            if let Some(existing) = self.store.get_memory(id)? {
                if existing.status == MemoryStatus::Deleted {
                    return Err(LifecycleError::AlreadyDeleted {
                        memory_id: id.to_string(),
                    }
                    .into());
                }
                let was_promoted = !existing.ingestion.quarantined
                    && existing
                        .provenance
                        .iter()
                        .any(|e| e.action == ProvenanceAction::Quarantined);
                if was_promoted {
                    return Ok(existing);
                }
            }
            return Err(LifecycleError::QuarantineNotFound {
                memory_id: id.to_string(),
            }
            .into());
        };

        // An in-place quarantined memory also resides in primary, where
        // edits land first. The higher version wins, and a deleted memory
        // stays deleted.
        if let Some(primary) = self.store.get_memory(id)? {
            if primary.status == MemoryStatus::Deleted {
                return Err(LifecycleError::AlreadyDeleted {
                    memory_id: id.to_string(),
                }
                .into());
            }
            if primary.version > memory.version {
                memory = primary;
            }
        }
        if memory.status == MemoryStatus::Deleted {
            return Err(LifecycleError::AlreadyDeleted {
                memory_id: id.to_string(),
            }
            .into());
        }

        memory.status = MemoryStatus::Active;
        memory.ingestion.quarantined = false;
        memory.provenance.push(
            ProvenanceEntry::new(ProvenanceAction::Modified, actor)
                .with_reason("promoted from quarantine"),
        );

        self.store.save_memory(&memory)?;
        self.store.delete_quarantined(id)?;
        self.audit(
            &memory.namespace,
            "promote",
            id,
            actor,
            serde_json::Value::Null,
        );
        tracing::debug!(memory_id = %id, "memory promoted from quarantine");
        Ok(memory)
    }

    /// Merge two or more memories into a brand-new one, then soft-delete the
    /// sources with provenance citing the merged memory.
    ///
    /// Not atomic: the merged memory is created first, sources are deleted
    /// one by one. A retry after a crash finds sources already deleted
    /// citing the earlier merged memory and resumes that merge instead of
    /// starting a second one.
    pub fn merge(
        &self,
        ids: &[String],
        merged_content: &str,
        actor: &str,
        options: MergeOptions,
    ) -> EngramResult<MemoryObject> {
        // Lock sources in sorted order so concurrent merges cannot deadlock.
        let mut ordered: Vec<String> = ids.to_vec();
        ordered.sort();
        ordered.dedup();
        if ordered.len() < 2 {
            return Err(LifecycleError::MergeRequiresTwo { count: ordered.len() }.into());
        }
        let handles: Vec<Arc<Mutex<()>>> =
            ordered.iter().map(|id| self.lock_handle(id)).collect();
        let _guards: Vec<_> = handles
            .iter()
            .map(|h| h.lock().unwrap_or_else(|poisoned| poisoned.into_inner()))
            .collect();

        let mut sources: Vec<MemoryObject> = Vec::with_capacity(ids.len());
        let mut prior_merge: Option<String> = None;
        for id in ids {
            if sources.iter().any(|m| m.memory_id == *id) {
                continue;
            }
            let (memory, _) = self.fetch(id)?.ok_or(LifecycleError::NotFound {
                memory_id: id.clone(),
            })?;
            if memory.status == MemoryStatus::Deleted {
                // A source already folded in by an interrupted earlier
                // attempt is resumable; any other deleted source is a hard
                // error.
                match merge_target(&memory) {
                    Some(target) if prior_merge.as_ref().map_or(true, |t| *t == target) => {
                        prior_merge = Some(target);
                    }
                    _ => {
                        return Err(LifecycleError::InvalidTransition {
                            memory_id: id.clone(),
                            status: memory.status,
                            action: "merge",
                        }
                        .into());
                    }
                }
                continue;
            }
            sources.push(memory);
        }

        if let Some(merged_id) = prior_merge {
            return self.resume_merge(&merged_id, &sources, actor);
        }

        let namespace = sources[0].namespace.clone();
        for source in &sources[1..] {
            if source.namespace != namespace {
                return Err(LifecycleError::NamespaceMismatch {
                    expected: namespace.key(),
                    found: source.namespace.key(),
                }
                .into());
            }
        }

        let tags = options.tags.unwrap_or_else(|| {
            sources
                .iter()
                .flat_map(|m| m.tags.iter().cloned())
                .collect()
        });
        let importance = options.importance.unwrap_or_else(|| {
            Score::new(mean(sources.iter().map(|m| m.importance.value())))
        });
        let task_criticality = options.task_criticality.unwrap_or_else(|| {
            Score::new(mean(sources.iter().map(|m| m.task_criticality.value())))
        });

        let mut draft = MemoryDraft::new(
            namespace.clone(),
            merged_content,
            engram_core::memory::MemorySource::new(
                engram_core::memory::SourceType::System,
                "merge",
            ),
        );
        draft.tags = tags;
        draft.importance = importance;
        draft.task_criticality = task_criticality;
        let mut merged = self.create(draft, actor)?;

        // Record the merge lineage on the new memory.
        let mut entry = ProvenanceEntry::new(ProvenanceAction::Merged, actor)
            .with_merged_from(ids.to_vec());
        if let Some(reason) = &options.reason {
            entry = entry.with_reason(reason.clone());
        }
        merged.provenance.push(entry);
        match merged.status {
            MemoryStatus::Quarantined => self.store.save_quarantined(&merged)?,
            _ => self.store.update_memory(&merged)?,
        }

        let delete_reason = format!("merged into {}", merged.memory_id);
        for source in &sources {
            self.delete_locked(&source.memory_id, actor, &delete_reason, ProvenanceAction::Deleted)?;
        }

        self.audit(
            &namespace,
            "merge",
            &merged.memory_id,
            actor,
            serde_json::json!({ "sources": ids }),
        );
        Ok(merged)
    }

    /// Finish a merge an earlier attempt started: the merged memory already
    /// exists and some sources were already deleted citing it. Soft-deletes
    /// the remaining sources and returns the existing merged memory.
    fn resume_merge(
        &self,
        merged_id: &str,
        remaining: &[MemoryObject],
        actor: &str,
    ) -> EngramResult<MemoryObject> {
        let (merged, _) = self.fetch(merged_id)?.ok_or(LifecycleError::NotFound {
            memory_id: merged_id.to_string(),
        })?;
        let lineage = merged
            .provenance
            .iter()
            .rev()
            .find_map(|entry| {
                if entry.action == ProvenanceAction::Merged {
                    entry.merged_from.clone()
                } else {
                    None
                }
            })
            .unwrap_or_default();

        let delete_reason = format!("merged into {merged_id}");
        for source in remaining {
            // Only sources the original merge named may be folded in.
            if !lineage.iter().any(|id| id == &source.memory_id) {
                return Err(LifecycleError::InvalidTransition {
                    memory_id: source.memory_id.clone(),
                    status: source.status,
                    action: "merge",
                }
                .into());
            }
            self.delete_locked(&source.memory_id, actor, &delete_reason, ProvenanceAction::Deleted)?;
        }

        self.audit(
            &merged.namespace,
            "merge",
            merged_id,
            actor,
            serde_json::json!({
                "resumed": true,
                "sources": remaining.iter().map(|m| m.memory_id.clone()).collect::<Vec<_>>(),
            }),
        );
        tracing::debug!(memory_id = %merged_id, "resumed an interrupted merge");
        Ok(merged)
    }

    /// Roll back to a prior version.
    ///
    /// The current state is snapshotted into history first, so the rollback
    /// itself is recoverable; the version keeps increasing.
    pub fn rollback(&self, id: &str, target_version: u64, actor: &str) -> EngramResult<MemoryObject> {
        let handle = self.lock_handle(id);
        let _guard = handle.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let (mut memory, partition) = self.fetch_mutable(id, "rollback")?;
        if memory.previous_versions.is_empty() {
            return Err(LifecycleError::VersionNotFound {
                memory_id: id.to_string(),
                requested: target_version,
                current: memory.version,
            }
            .into());
        }
        let target = memory
            .previous_versions
            .iter()
            .find(|v| v.version == target_version)
            .cloned()
            .ok_or(LifecycleError::VersionNotFound {
                memory_id: id.to_string(),
                requested: target_version,
                current: memory.version,
            })?;

        let prior_version = memory.version;
        let previous_content = memory.content.clone();
        let rollback_reason = format!("rollback to version {target_version}");
        memory
            .previous_versions
            .push(memory.snapshot(actor, Some(&rollback_reason)));

        memory.content_hash = MemoryObject::compute_content_hash(&target.content);
        memory.content = target.content;
        memory.content_type = target.content_type;
        memory.tags = target.tags;
        memory.importance = target.importance;
        memory.task_criticality = target.task_criticality;
        memory.version += 1;
        memory.provenance.push(
            ProvenanceEntry::new(ProvenanceAction::RolledBack, actor)
                .with_version(memory.version)
                .with_reason(rollback_reason)
                .with_previous_content(previous_content),
        );

        self.persist(&memory, partition, prior_version)?;
        self.audit(
            &memory.namespace,
            "rollback",
            id,
            actor,
            serde_json::json!({ "target_version": target_version, "version": memory.version }),
        );
        Ok(memory)
    }

    /// Sweep a namespace for expired memories and soft-delete them.
    ///
    /// `ttl_seconds = 0` expires immediately; `None` never expires via TTL.
    /// One batch audit entry summarizes the sweep.
    pub fn expire(&self, namespace: &NamespaceKey) -> EngramResult<ExpiryReport> {
        let now = Utc::now();
        let candidates = self
            .store
            .list_memories(namespace, &MemoryFilter::active())?;

        let mut report = ExpiryReport {
            scanned: candidates.len(),
            expired_ids: Vec::new(),
        };
        for memory in candidates {
            if !memory.is_expired(now) {
                continue;
            }
            let handle = self.lock_handle(&memory.memory_id);
            let _guard = handle.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            match self.delete_locked(
                &memory.memory_id,
                SYSTEM_ACTOR,
                "ttl/SLO expiry",
                ProvenanceAction::Expired,
            ) {
                Ok(_) => report.expired_ids.push(memory.memory_id),
                // Lost the race to another sweep or an explicit delete.
                Err(e) => {
                    tracing::debug!(memory_id = %memory.memory_id, error = %e, "expiry skipped")
                }
            }
        }

        self.audit(
            namespace,
            "expire_sweep",
            "batch",
            SYSTEM_ACTOR,
            serde_json::json!({
                "scanned": report.scanned,
                "expired": report.expired_ids.len(),
                "expired_ids": report.expired_ids,
            }),
        );
        Ok(report)
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let collected: Vec<f64> = values.collect();
    if collected.is_empty() {
        return 0.0;
    }
    collected.iter().sum::<f64>() / collected.len() as f64
}

/// The merged-memory id a deleted source cites, if its deletion came from a
/// merge.
fn merge_target(memory: &MemoryObject) -> Option<String> {
    memory.provenance.iter().rev().find_map(|entry| {
        if entry.action != ProvenanceAction::Deleted {
            return None;
        }
        entry
            .reason
            .as_deref()?
            .strip_prefix("merged into ")
            .map(str::to_string)
    })
}
