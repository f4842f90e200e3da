use std::{collections::HashMap, env::VarError, sync::Arc};
use tokio::sync::Mutex;

use crate::{ArcOsStr, ArcStr};

/// Mock implementation of the Env actor for testing purposes.
///
/// Variables live in memory, so tests never touch the process environment.
#[derive(Debug, Clone, Default)]
pub struct Mock {
    variables: Arc<Mutex<HashMap<ArcOsStr, ArcStr>>>,
}

impl Mock {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_variables(variables: HashMap<ArcOsStr, ArcStr>) -> Self {
        Self {
            variables: Arc::new(Mutex::new(variables)),
        }
    }

    pub async fn env(&self, key: ArcOsStr) -> Result<ArcStr, VarError> {
        let variables = self.variables.lock().await;
        variables.get(&key).cloned().ok_or(VarError::NotPresent)
    }
}
