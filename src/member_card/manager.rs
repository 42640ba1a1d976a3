use crate::error::Result;
use crate::member_card::configuration::Configuration;
use crate::member_card::observer::MemberCardObserver;
use crate::member_card::request::request_member_card;
use crate::member_card::response::parse;
use crate::member_card::session_store::MemberSessionStore;
use crate::storage;
use crate::storage::KeyValueStorage;
use crate::storage::database::DatabaseStorage;
use crate::tools::web::build_client;
use dto::membership_record::MembershipRecord;
use dto::saved_member_info::SavedMemberInfo;
use reqwest::Client;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::task::JoinHandle;

#[derive(Debug, Default)]
struct MemberSessionState {
    current_member_card: Option<MembershipRecord>,
    current_member_name_index: usize,
}

/// Validate member cards against the membership service and remember the last validated one.
///
/// A validation either fully succeeds, replacing the current card and saving it,
/// or leaves everything as it was.
/// When validations overlap, the one completing last wins.
pub struct MemberDataManager {
    client: Client,
    configuration: Configuration,
    session_store: MemberSessionStore,
    state: Mutex<MemberSessionState>,
    observer: Mutex<Option<Arc<dyn MemberCardObserver>>>,
}

impl MemberDataManager {
    pub fn new(
        client: Client,
        configuration: Configuration,
        storage: Arc<dyn KeyValueStorage>,
    ) -> Self {
        Self {
            client,
            configuration,
            session_store: MemberSessionStore::new(storage),
            state: Mutex::new(MemberSessionState::default()),
            observer: Mutex::new(None),
        }
    }

    /// Build a manager saving its session in the SQLite database given by `--database-url`,
    /// calling the service configured by `--member-card-url` and `--member-card-token`.
    pub fn from_env_args() -> Result<Self> {
        let client = build_client()?;
        let configuration = Configuration::from_env_args()?;
        let storage = DatabaseStorage::from_env_args()?;

        Ok(Self::new(client, configuration, Arc::new(storage)))
    }

    pub fn set_observer(&self, observer: Arc<dyn MemberCardObserver>) {
        *self.observer.lock().unwrap_or_else(PoisonError::into_inner) = Some(observer);
    }

    pub fn current_member_card(&self) -> Option<MembershipRecord> {
        self.lock_state().current_member_card.clone()
    }

    pub fn current_member_name_index(&self) -> usize {
        self.lock_state().current_member_name_index
    }

    /// Select which name of the current card is displayed.
    /// This isn't saved until [save_current_member](Self::save_current_member) is called.
    pub fn set_current_member_name_index(&self, index: usize) {
        self.lock_state().current_member_name_index = index;
    }

    /// Validate the card of `member_id` with `zip_code`.
    /// On success, the card is saved then becomes the current one.
    /// If it can't be saved, the validation fails and nothing changes.
    /// The observer, if any, is notified either way.
    pub async fn validate_member(
        &self,
        member_id: &str,
        zip_code: &str,
    ) -> Result<MembershipRecord> {
        debug!("Validating member card [member_id: {member_id}]");
        let outcome = match self.load_member_card(member_id, zip_code).await {
            Ok(membership_record) => self
                .replace_current_member_card(&membership_record)
                .map(|_| membership_record),
            Err(error) => Err(error),
        };

        match outcome {
            Ok(membership_record) => {
                self.notify(|observer| observer.on_member_card_loaded(&membership_record));
                Ok(membership_record)
            }
            Err(error) => {
                warn!("Can't validate member card [member_id: {member_id}]: {error}");
                self.notify(|observer| observer.on_member_card_load_failed());
                Err(error)
            }
        }
    }

    /// Same as [validate_member](Self::validate_member), in the background.
    /// The outcome is only reported to the observer.
    pub fn spawn_validate_member(
        self: &Arc<Self>,
        member_id: String,
        zip_code: String,
    ) -> JoinHandle<()> {
        let manager = Arc::clone(self);
        tokio::spawn(async move {
            let _ = manager.validate_member(&member_id, &zip_code).await;
        })
    }

    /// Save the current card with its selected name. Does nothing if no card has been validated.
    pub fn save_current_member(&self) -> Result<()> {
        let state = self.lock_state();
        Ok(self.save(&state)?)
    }

    /// Get the saved member, if there is a complete one.
    /// The selected name index is restored from what was saved.
    pub fn get_saved_member(&self) -> Option<SavedMemberInfo> {
        let mut state = self.lock_state();
        self.restore(&mut state)
    }

    async fn load_member_card(&self, member_id: &str, zip_code: &str) -> Result<MembershipRecord> {
        let body =
            request_member_card(&self.client, &self.configuration, member_id, zip_code).await?;

        Ok(parse(&body, zip_code)?)
    }

    /// Save `membership_record` and make it the current card.
    /// The state is only updated once the saved member has been read and the new one written.
    // Storage I/O is synchronous and runs while the state is locked, which keeps commits
    // from interleaving. Session entries are few and small, so the lock is held briefly.
    fn replace_current_member_card(&self, membership_record: &MembershipRecord) -> Result<()> {
        let mut state = self.lock_state();
        let card_id = membership_record.card_id();

        let mut name_index = state.current_member_name_index;
        let saved_session = self.session_store.load().inspect_err(|error| {
            error!("Can't read saved member [member_id: {card_id}]\n{error:#?}")
        })?;
        if let Some(saved_session) = saved_session {
            name_index = *saved_session.selected_name_index();
            // A name selected on another card means nothing on this one.
            if saved_session.member_info().member_id() != card_id {
                name_index = 0;
            }
        }

        self.session_store
            .save(membership_record, name_index)
            .inspect_err(|error| {
                error!("Can't save current member [member_id: {card_id}]\n{error:#?}")
            })?;

        state.current_member_card = Some(membership_record.clone());
        state.current_member_name_index = name_index;
        Ok(())
    }

    fn save(&self, state: &MemberSessionState) -> storage::Result<()> {
        match &state.current_member_card {
            Some(membership_record) => self
                .session_store
                .save(membership_record, state.current_member_name_index),
            None => Ok(()),
        }
    }

    fn restore(&self, state: &mut MemberSessionState) -> Option<SavedMemberInfo> {
        match self.session_store.load() {
            Ok(Some(saved_session)) => {
                state.current_member_name_index = *saved_session.selected_name_index();
                Some(saved_session.member_info().clone())
            }
            Ok(None) => None,
            Err(error) => {
                error!("Can't read saved member\n{error:#?}");
                None
            }
        }
    }

    fn notify(&self, notification: impl FnOnce(&dyn MemberCardObserver)) {
        let observer = self
            .observer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(observer) = observer {
            notification(observer.as_ref());
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, MemberSessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
