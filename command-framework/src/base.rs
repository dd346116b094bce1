use crate::guard::BridgeGuard;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;

/// Identity and bookkeeping shared by every command.
///
/// Commands embed a `CommandBase` and hand it out through
/// [`Command::base`](crate::Command::base). The id is fixed at construction;
/// the string id is computed once on first read; the description falls back
/// to a generated text until one is set.
#[derive(Debug)]
pub struct CommandBase {
    id: i32,
    string_id: OnceCell<String>,
    description: Mutex<Option<String>>,
    description_url: Mutex<Option<String>>,
    guard: BridgeGuard,
}

impl CommandBase {
    /// Creates a base with the given id. Use
    /// [`CommandFactory`](crate::CommandFactory) to get ids from a sequence.
    pub fn new(id: i32) -> Self {
        Self {
            id,
            string_id: OnceCell::new(),
            description: Mutex::new(None),
            description_url: Mutex::new(None),
            guard: BridgeGuard::new(),
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    /// Returns `"{type_name}_{id:05}"`, computed on the first call. A
    /// negative id keeps five digits after the sign (`-5` gives `_-00005`).
    ///
    /// Later calls return the cached value whatever `type_name` they pass.
    pub fn string_id(&self, type_name: &str) -> &str {
        self.string_id.get_or_init(|| {
            let sign = if self.id < 0 { "-" } else { "" };
            format!("{}_{}{:05}", type_name, sign, self.id.unsigned_abs())
        })
    }

    /// Returns the description, generating the default on first read.
    pub fn description(&self, type_name: &str) -> String {
        let mut description = self.description.lock();
        description
            .get_or_insert_with(|| format!("A command of type {}, ID = {}.", type_name, self.id))
            .clone()
    }

    /// Sets the description. An empty string restores the generated default.
    pub fn set_description(&self, description: impl Into<String>) {
        let description = description.into();
        *self.description.lock() = if description.is_empty() {
            None
        } else {
            Some(description)
        };
    }

    pub fn description_url(&self) -> Option<String> {
        self.description_url.lock().clone()
    }

    /// Sets the description URL. An empty string clears it.
    pub fn set_description_url(&self, url: impl Into<String>) {
        let url = url.into();
        *self.description_url.lock() = if url.is_empty() { None } else { Some(url) };
    }

    pub fn guard(&self) -> &BridgeGuard {
        &self.guard
    }
}
