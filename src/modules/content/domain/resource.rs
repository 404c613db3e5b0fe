use serde::de::DeserializeOwned;
use serde::Serialize;

/// One of the independently managed portfolio collections.
///
/// Every kind shares the same REST shape — `GET`/`POST` on the collection
/// path, `PUT`/`DELETE` on `<path>/:id` — and records carry a
/// server-assigned string id.
pub trait ResourceKind: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Editable input accepted by create and update.
    type Draft: ResourceDraft;

    /// Collection path under the API origin, e.g. `/api/skills`.
    const COLLECTION_PATH: &'static str;

    /// Lowercase singular label used in logs and confirmation prompts.
    const LABEL: &'static str;

    fn id(&self) -> &str;

    /// Draft copy taken at edit-start: the canonical record with its list
    /// fields encoded back to their comma-joined text form. The caller
    /// either commits the (mutated) draft through an update or discards
    /// it; the canonical record is untouched either way.
    fn draft(&self) -> Self::Draft;
}

/// Editable input for a resource.
///
/// `to_payload` produces the wire shape; it is the single place where
/// comma-joined text fields are decoded back into lists.
pub trait ResourceDraft: Clone + Send + Sync + 'static {
    type Payload: Serialize + Send + Sync;

    fn to_payload(&self) -> Self::Payload;
}
