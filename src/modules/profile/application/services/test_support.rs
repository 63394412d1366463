//! In-memory profile ports for the service tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::{AvatarRecord, UserProfile};
use crate::profile::application::ports::outgoing::{
    AvatarRepository, AvatarRepositoryError, AvatarStorage, AvatarStorageError, BioSanitizer,
    ProfileRepository, ProfileRepositoryError,
};

pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
pub const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0, 0x10, b'J', b'F', b'I', b'F'];

pub fn profile_for(user_id: UserId) -> UserProfile {
    UserProfile {
        user_id,
        date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
        bio: "<p>Writes with a Pelikan.</p>".to_string(),
        given_name: "Alice".to_string(),
        family_name: "Smith".to_string(),
        city: "Leeds".to_string(),
        state: String::new(),
        country: "UK".to_string(),
        favourite_animal: String::new(),
        hobby: String::new(),
        favourite_fountain_pen: "Pelikan M800".to_string(),
    }
}

#[derive(Clone, Default)]
pub struct InMemoryProfiles {
    profiles: Arc<Mutex<HashMap<Uuid, UserProfile>>>,
}

impl InMemoryProfiles {
    pub fn with(profile: UserProfile) -> Self {
        let store = Self::default();
        store
            .profiles
            .lock()
            .unwrap()
            .insert(profile.user_id.value(), profile);
        store
    }

    pub fn get(&self, user_id: Uuid) -> Option<UserProfile> {
        self.profiles.lock().unwrap().get(&user_id).cloned()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfiles {
    async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<UserProfile>, ProfileRepositoryError> {
        Ok(self.get(user_id))
    }

    async fn upsert(&self, profile: UserProfile) -> Result<UserProfile, ProfileRepositoryError> {
        self.profiles
            .lock()
            .unwrap()
            .insert(profile.user_id.value(), profile.clone());
        Ok(profile)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryAvatars {
    records: Arc<Mutex<HashMap<Uuid, AvatarRecord>>>,
    fail_promote: bool,
}

impl InMemoryAvatars {
    pub fn with(user_id: Uuid, record: AvatarRecord) -> Self {
        let store = Self::default();
        store.records.lock().unwrap().insert(user_id, record);
        store
    }

    /// `promote` fails with a database error, every other call works.
    pub fn failing_promote(self) -> Self {
        Self {
            fail_promote: true,
            ..self
        }
    }

    pub fn get(&self, user_id: Uuid) -> Option<AvatarRecord> {
        self.records.lock().unwrap().get(&user_id).cloned()
    }

    fn update(&self, user_id: Uuid, f: impl FnOnce(&mut AvatarRecord)) -> AvatarRecord {
        let mut records = self.records.lock().unwrap();
        let record = records.entry(user_id).or_default();
        f(record);
        record.clone()
    }
}

#[async_trait]
impl AvatarRepository for InMemoryAvatars {
    async fn find(&self, user_id: Uuid) -> Result<Option<AvatarRecord>, AvatarRepositoryError> {
        Ok(self.get(user_id))
    }

    async fn set_pending(
        &self,
        user_id: Uuid,
        pending_key: String,
    ) -> Result<AvatarRecord, AvatarRepositoryError> {
        Ok(self.update(user_id, |r| r.pending_key = Some(pending_key)))
    }

    async fn promote(
        &self,
        user_id: Uuid,
        image_key: String,
    ) -> Result<AvatarRecord, AvatarRepositoryError> {
        if self.fail_promote {
            return Err(AvatarRepositoryError::DatabaseError(
                "connection reset".to_string(),
            ));
        }
        Ok(self.update(user_id, |r| {
            r.image_key = Some(image_key);
            r.pending_key = None;
        }))
    }

    async fn clear_pending(&self, user_id: Uuid) -> Result<AvatarRecord, AvatarRepositoryError> {
        Ok(self.update(user_id, |r| r.pending_key = None))
    }
}

#[derive(Clone, Default)]
pub struct InMemoryStorage {
    objects: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl InMemoryStorage {
    pub fn with(key: &str, bytes: &[u8]) -> Self {
        let storage = Self::default();
        storage
            .objects
            .lock()
            .unwrap()
            .insert(key.to_string(), bytes.to_vec());
        storage
    }

    pub fn contains(&self, key: &str) -> bool {
        self.objects.lock().unwrap().contains_key(key)
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.objects.lock().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }
}

#[async_trait]
impl AvatarStorage for InMemoryStorage {
    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<(), AvatarStorageError> {
        self.objects.lock().unwrap().insert(key.to_string(), bytes);
        Ok(())
    }

    async fn rename(&self, from: &str, to: &str) -> Result<(), AvatarStorageError> {
        let mut objects = self.objects.lock().unwrap();
        let bytes = objects
            .remove(from)
            .ok_or_else(|| AvatarStorageError::NotFound(from.to_string()))?;
        objects.insert(to.to_string(), bytes);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), AvatarStorageError> {
        self.objects
            .lock()
            .unwrap()
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| AvatarStorageError::NotFound(key.to_string()))
    }
}

/// Strips angle brackets so tests can see the sanitizer ran.
pub struct BracketStripper;

impl BioSanitizer for BracketStripper {
    fn sanitize(&self, html: &str) -> String {
        html.replace(['<', '>'], "")
    }
}
