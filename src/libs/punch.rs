//! The punch engine: serialized read-modify-write of shift records.
//!
//! Every punch for one `(employee, date)` key runs under that key's lock for
//! the whole load → apply → save span. Different keys never share a lock, so
//! employees punch in parallel. The lock is taken with a timeout; a punch that
//! cannot get it fails with [`PunchError::LockTimeout`] and writes nothing.
//!
//! ## Day Rollover
//!
//! Punches are only accepted for the clock's current day. Sessions and lock
//! entries of earlier days are dropped on the next punch; an open slot left
//! over from yesterday stays open in its record and is reported as incomplete,
//! it is never closed automatically.
//!
//! ## Usage
//!
//! ```rust
//! use shiftclock::libs::clock::SystemClock;
//! use shiftclock::libs::config::PunchConfig;
//! use shiftclock::libs::punch::PunchClock;
//! use shiftclock::libs::session::PunchAction;
//! use shiftclock::libs::shift::{EmployeeId, SlotId};
//! use shiftclock::libs::store::MemoryStore;
//!
//! let clock = PunchClock::new(MemoryStore::new(), SystemClock, PunchConfig::default());
//! let employee = EmployeeId::new("e-17");
//! let record = clock.punch(&employee, SlotId::First, PunchAction::Start)?;
//! assert!(record.first_slot.is_open());
//! # Ok::<(), shiftclock::libs::error::PunchError>(())
//! ```

use crate::libs::clock::Clock;
use crate::libs::config::PunchConfig;
use crate::libs::error::{Conflict, PunchError, PunchResult};
use crate::libs::session::{PunchAction, PunchSession, SessionState};
use crate::libs::shift::{EmployeeId, ShiftKey, ShiftRecord, SlotId};
use crate::libs::store::ShiftStore;
use chrono::NaiveDate;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Punch engine over a [`ShiftStore`] and a [`Clock`].
///
/// Safe to share between threads; one instance serves any number of
/// employees. The session map only records which employees punched through
/// this instance today, the state itself always comes from the store.
pub struct PunchClock<S, C> {
    store: S,
    clock: C,
    config: PunchConfig,
    locks: Mutex<HashMap<ShiftKey, Arc<Mutex<()>>>>,
    sessions: Mutex<HashMap<EmployeeId, PunchSession>>,
}

impl<S: ShiftStore, C: Clock> PunchClock<S, C> {
    /// Creates an engine with no sessions and no locks.
    pub fn new(store: S, clock: C, config: PunchConfig) -> Self {
        Self {
            store,
            clock,
            config,
            locks: Mutex::new(HashMap::new()),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// The persistence collaborator punches are written through.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Settings this engine was built with.
    pub fn config(&self) -> &PunchConfig {
        &self.config
    }

    /// Punches `action` on `slot` for the clock's current day.
    pub fn punch(&self, employee_id: &EmployeeId, slot: SlotId, action: PunchAction) -> PunchResult<ShiftRecord> {
        let today = self.clock.now().date();
        self.apply_punch(employee_id, today, slot, action)
    }

    /// Applies one punch to the record of `employee_id` on `date`.
    ///
    /// Returns the saved record. Rejected punches come back as
    /// [`PunchError::Conflict`] and leave the stored record untouched.
    pub fn apply_punch(&self, employee_id: &EmployeeId, date: NaiveDate, slot: SlotId, action: PunchAction) -> PunchResult<ShiftRecord> {
        let key = ShiftKey::new(employee_id.clone(), date);
        // Checked before the lock table is touched, so other days never get an entry.
        self.ensure_today(&key, self.clock.now().date())?;
        let lock = self.key_lock(&key);
        let _guard = match lock.try_lock_for(self.config.lock_timeout()) {
            Some(guard) => guard,
            None => {
                warn!(shift = %key, %slot, %action, "timed out waiting for shift lock");
                return Err(PunchError::LockTimeout(key));
            }
        };

        let now = self.clock.now();
        let today = now.date();
        self.roll_over(today);
        // The day may have turned while waiting for the lock.
        self.ensure_today(&key, today)?;

        let record = self
            .store
            .load(employee_id, date)?
            .unwrap_or_else(|| ShiftRecord::new(employee_id.clone(), date));
        let session = PunchSession::new(record);

        let next = session
            .apply(slot, action, now, self.config.reject_ambiguous)
            .inspect_err(|conflict| debug!(shift = %key, %slot, %action, state = %session.state(), %conflict, "punch rejected"))?;

        let saved = self.store.save(&next)?;
        let saved_session = PunchSession::new(saved.clone());
        info!(
            employee = %employee_id,
            %date,
            %slot,
            %action,
            at = %now.format("%H:%M:%S"),
            state = %saved_session.state(),
            "punch recorded"
        );
        self.sessions.lock().insert(employee_id.clone(), saved_session);

        Ok(saved)
    }

    /// Today's session of `employee_id`, always rebuilt from the stored record.
    ///
    /// Other engines may write through the same store, so the cached session
    /// is never trusted on its own. A cached session whose version no longer
    /// matches the store is replaced.
    pub fn session(&self, employee_id: &EmployeeId) -> PunchResult<PunchSession> {
        let today = self.clock.now().date();
        let record = self
            .store
            .load(employee_id, today)?
            .unwrap_or_else(|| ShiftRecord::new(employee_id.clone(), today));
        let session = PunchSession::new(record);

        if let Some(cached) = self
            .sessions
            .lock()
            .get_mut(employee_id)
            .filter(|cached| cached.is_for_day(today))
        {
            if cached.record().version != session.record().version {
                debug!(
                    employee = %employee_id,
                    cached = cached.record().version,
                    stored = session.record().version,
                    "session refreshed from store"
                );
                *cached = session.clone();
            }
        }
        Ok(session)
    }

    /// State of today's session, read from the store.
    ///
    /// `None` until this engine has recorded a punch for the employee today.
    pub fn session_state(&self, employee_id: &EmployeeId) -> PunchResult<Option<SessionState>> {
        let today = self.clock.now().date();
        let started = self
            .sessions
            .lock()
            .get(employee_id)
            .is_some_and(|session| session.is_for_day(today));
        if !started {
            return Ok(None);
        }
        Ok(Some(self.session(employee_id)?.state()))
    }

    /// Number of employee-days that currently hold a lock entry.
    pub fn tracked_shifts(&self) -> usize {
        self.locks.lock().len()
    }

    fn ensure_today(&self, key: &ShiftKey, today: NaiveDate) -> PunchResult<()> {
        if key.date != today {
            debug!(shift = %key, %today, "punch for another day rejected");
            return Err(Conflict::StaleDay { date: key.date, today }.into());
        }
        Ok(())
    }

    fn key_lock(&self, key: &ShiftKey) -> Arc<Mutex<()>> {
        self.locks.lock().entry(key.clone()).or_default().clone()
    }

    /// Forgets sessions of earlier days and every idle lock not for `today`.
    fn roll_over(&self, today: NaiveDate) {
        self.sessions.lock().retain(|employee_id, session| {
            let current = session.is_for_day(today);
            if !current {
                debug!(employee = %employee_id, from = %session.date(), to = %today, "discarding session of previous day");
            }
            current
        });
        self.locks
            .lock()
            .retain(|key, lock| key.date == today || Arc::strong_count(lock) > 1);
    }
}
