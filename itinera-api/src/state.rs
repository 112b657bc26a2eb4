use std::sync::Arc;

use itinera_domain::CustomerDirectory;

#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn CustomerDirectory>,
}
