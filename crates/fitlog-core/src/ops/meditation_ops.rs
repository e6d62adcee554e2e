use fitlog_core_types::RecordId;

use super::collection::prepend;
use super::{creation_stamp, store::Store};
use crate::model::{MeditationSession, NewMeditationSession};

/// Record a meditation session
///
/// Sessions are append-only; there is no update or delete.
pub fn add_meditation_session(
    store: &mut Store,
    fields: NewMeditationSession,
) -> MeditationSession {
    let (date, timestamp) = creation_stamp();
    let session = MeditationSession::create(RecordId::new(), date, timestamp, fields);
    prepend(store, session).clone()
}
