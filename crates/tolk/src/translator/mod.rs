//! The translator context: catalog, current culture, default policy and
//! change notification, plus the resolution algorithm.
//!
//! A [`Translator`] is built once at application start and shared (usually in
//! an `Arc`). Tests construct their own instance instead of mutating shared
//! state.

mod config;
mod diagnostic;
mod resolve;

use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};

pub use config::TranslatorConfig;
pub use diagnostic::{DiagnosticFormat, INVALID_KEY_TEXT};

use crate::ambient::ambient_culture;
use crate::catalog::CultureCatalog;
use crate::error::TranslationError;
use crate::store::ResourceStore;
use crate::translation::Translation;
use crate::types::{Culture, ErrorHandling};
use crate::validate::{ValidationWarning, validate_translations};

/// Callback invoked with the new current culture.
type CultureChangedHandler = Arc<dyn Fn(Option<&Culture>) + Send + Sync>;

/// Handle returned by [`Translator::subscribe`], used to unsubscribe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Cache key for translation handles: store address, key, policy.
type TranslationCacheKey = (usize, String, ErrorHandling);

/// Resolves resource keys to strings for the current culture.
///
/// The translator owns:
/// - the [`CultureCatalog`] of cultures with resource data
/// - the current culture, validated against the catalog
/// - the default [`ErrorHandling`] applied when callers pass `Default`
/// - the resource directory the catalog was scanned from
/// - subscribers notified when the current culture changes
///
/// Every method takes `&self`; the translator is `Send + Sync`.
///
/// # Example
///
/// ```
/// use tolk::{Culture, MemoryStore, Translator, TranslatorConfig};
///
/// let en = Culture::parse("en").unwrap();
/// let store = MemoryStore::new("Resources")
///     .with(Culture::invariant(), "Greeting", "Hello")
///     .with(en.clone(), "Greeting", "Hello!");
///
/// let translator = Translator::new(
///     TranslatorConfig::builder()
///         .detect_ambient_culture(false)
///         .build(),
/// );
/// translator.catalog().add(en.clone());
/// translator.set_current_culture(Some(en)).unwrap();
///
/// assert_eq!(translator.translate(Some(&store), "Greeting").unwrap(), "Hello!");
/// ```
pub struct Translator {
    resource_directory: RwLock<Option<PathBuf>>,
    catalog: CultureCatalog,
    current_culture: RwLock<Option<Culture>>,
    error_handling: RwLock<ErrorHandling>,
    subscribers: RwLock<Vec<(SubscriptionId, CultureChangedHandler)>>,
    channels: Mutex<Vec<Sender<Option<Culture>>>>,
    next_subscription: AtomicU64,
    translations: Mutex<HashMap<TranslationCacheKey, Weak<Translation>>>,
}

impl Default for Translator {
    fn default() -> Self {
        Translator::new(TranslatorConfig::default())
    }
}

impl Debug for Translator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("resource_directory", &self.resource_directory())
            .field("cultures", &self.catalog.cultures())
            .field("current_culture", &self.current_culture())
            .field("error_handling", &self.error_handling())
            .field("subscribers", &self.subscriber_count())
            .finish_non_exhaustive()
    }
}

impl Translator {
    /// Build a translator: scan the resource directory and pick the initial
    /// current culture.
    ///
    /// The initial culture is `config.culture` when the catalog contains it (or
    /// it is invariant). Otherwise the ambient culture is matched against the
    /// catalog: an exact member, else a member with the same language, else
    /// no current culture.
    pub fn new(config: TranslatorConfig) -> Self {
        let catalog = CultureCatalog::build(config.resource_directory.as_deref());
        let current = initial_culture(&catalog, &config);
        tracing::debug!(
            resource_directory = ?config.resource_directory,
            cultures = catalog.len(),
            current_culture = ?current.as_ref().map(Culture::name),
            "translator created"
        );

        Self {
            resource_directory: RwLock::new(config.resource_directory),
            catalog,
            current_culture: RwLock::new(current),
            error_handling: RwLock::new(config.error_handling),
            subscribers: RwLock::new(Vec::new()),
            channels: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(0),
            translations: Mutex::new(HashMap::new()),
        }
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// The catalog of cultures with resource data.
    pub fn catalog(&self) -> &CultureCatalog {
        &self.catalog
    }

    /// Every known culture, ordered by name.
    pub fn cultures(&self) -> Vec<Culture> {
        self.catalog.cultures()
    }

    pub fn contains_culture(&self, culture: &Culture) -> bool {
        self.catalog.contains(culture)
    }

    pub fn resource_directory(&self) -> Option<PathBuf> {
        read_lock(&self.resource_directory).clone()
    }

    /// Point the translator at a new resource directory and rebuild the
    /// catalog from it.
    ///
    /// The current culture is left as is, even if the new catalog lacks it.
    pub fn set_resource_directory(&self, directory: Option<PathBuf>) {
        let mut slot = write_lock(&self.resource_directory);
        self.catalog.rebuild(directory.as_deref());
        tracing::debug!(
            resource_directory = ?directory,
            cultures = self.catalog.len(),
            "catalog rebuilt"
        );
        *slot = directory;
    }

    // =========================================================================
    // Error Handling
    // =========================================================================

    /// The policy applied when a call requests `ErrorHandling::Default`.
    pub fn error_handling(&self) -> ErrorHandling {
        *read_lock(&self.error_handling)
    }

    pub fn set_error_handling(&self, error_handling: ErrorHandling) {
        *write_lock(&self.error_handling) = error_handling;
    }

    // =========================================================================
    // Current Culture
    // =========================================================================

    /// The culture used when a call does not name one. `None` means unset.
    pub fn current_culture(&self) -> Option<Culture> {
        read_lock(&self.current_culture).clone()
    }

    /// Change the current culture and notify subscribers.
    ///
    /// Setting the value it already has does nothing and notifies nobody. A
    /// culture other than `None` or the invariant culture must be in the
    /// catalog, whatever the error handling policy.
    pub fn set_current_culture(&self, culture: Option<Culture>) -> Result<(), TranslationError> {
        {
            let mut current = write_lock(&self.current_culture);
            if *current == culture {
                return Ok(());
            }

            if let Some(candidate) = &culture {
                if !candidate.is_invariant() && !self.catalog.contains(candidate) {
                    return Err(TranslationError::InvalidCulture {
                        culture: candidate.clone(),
                        available: self.catalog.cultures(),
                    });
                }
            }

            current.clone_from(&culture);
        }

        tracing::debug!(culture = ?culture.as_ref().map(Culture::name), "current culture changed");
        self.notify(culture.as_ref());
        Ok(())
    }

    /// Register a handler called after every change of the current culture.
    ///
    /// Handlers run synchronously on the thread that made the change, after the
    /// translator has released its locks, so they may read the translator.
    /// Racing changes may invoke a handler concurrently and in any order; a
    /// handler that needs the latest value should re-read
    /// [`Translator::current_culture`] rather than trust its argument.
    pub fn subscribe(
        &self,
        handler: impl Fn(Option<&Culture>) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        write_lock(&self.subscribers).push((id, Arc::new(handler)));
        id
    }

    /// Remove a handler. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = write_lock(&self.subscribers);
        let before = subscribers.len();
        subscribers.retain(|(candidate, _)| *candidate != id);
        subscribers.len() != before
    }

    /// Receive culture changes over a channel instead of a callback.
    ///
    /// The channel stays registered until the receiver is dropped; it is
    /// removed at the next change after that.
    pub fn culture_changes(&self) -> Receiver<Option<Culture>> {
        let (sender, receiver) = mpsc::channel();
        self.channels
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(sender);
        receiver
    }

    /// Registered handlers plus open channels.
    pub fn subscriber_count(&self) -> usize {
        let channels = self
            .channels
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        read_lock(&self.subscribers).len() + channels
    }

    fn notify(&self, culture: Option<&Culture>) {
        let handlers: Vec<CultureChangedHandler> = read_lock(&self.subscribers)
            .iter()
            .map(|(_, handler)| Arc::clone(handler))
            .collect();
        for handler in handlers {
            handler(culture);
        }

        let mut channels = self
            .channels
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let before = channels.len();
        channels.retain(|sender| sender.send(culture.cloned()).is_ok());
        if channels.len() != before {
            tracing::trace!(dropped = before - channels.len(), "removed closed culture channels");
        }
    }

    // =========================================================================
    // Translation Handles
    // =========================================================================

    /// A handle that translates `key` against the current culture each time it
    /// is read, using the default error handling.
    ///
    /// Repeated calls for the same store and key return the same handle while
    /// any caller still holds it.
    pub fn get_or_create_translation(
        self: &Arc<Self>,
        store: Arc<dyn ResourceStore>,
        key: &str,
    ) -> Arc<Translation> {
        self.get_or_create_translation_with(store, key, ErrorHandling::Default)
    }

    /// Like [`Translator::get_or_create_translation`] with an explicit policy.
    pub fn get_or_create_translation_with(
        self: &Arc<Self>,
        store: Arc<dyn ResourceStore>,
        key: &str,
        error_handling: ErrorHandling,
    ) -> Arc<Translation> {
        let address = Arc::as_ptr(&store).cast::<()>() as usize;
        let cache_key = (address, key.to_string(), error_handling);

        let mut translations = self
            .translations
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = translations.get(&cache_key).and_then(Weak::upgrade) {
            return existing;
        }

        translations.retain(|_, handle| handle.strong_count() > 0);
        let translation = Arc::new(Translation::new(
            Arc::clone(self),
            store,
            key,
            error_handling,
        ));
        translations.insert(cache_key, Arc::downgrade(&translation));
        translation
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Check `store` for gaps across every culture in the catalog.
    pub fn validate(&self, store: &dyn ResourceStore) -> Vec<ValidationWarning> {
        validate_translations(store, &self.catalog.cultures())
    }
}

fn initial_culture(catalog: &CultureCatalog, config: &TranslatorConfig) -> Option<Culture> {
    if let Some(culture) = &config.culture {
        if culture.is_invariant() || catalog.contains(culture) {
            return Some(culture.clone());
        }
        tracing::warn!(culture = %culture, "configured culture is not in the catalog, ignoring it");
    }

    let ambient = match &config.ambient_culture {
        Some(culture) => Some(culture.clone()),
        None if config.detect_ambient_culture => ambient_culture(),
        None => None,
    }?;
    catalog.best_match(&ambient)
}

fn read_lock<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_lock<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
