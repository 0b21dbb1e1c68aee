//! SnareShare - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for sharing Ableton projects and event
//! creatives through presigned object-storage uploads.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  /            ShareLinkPage                                  │
//! │               ├── Hero                                       │
//! │               └── UploadPanel (picker, button, link, error)  │
//! │  /advertise   AdCampaignPage                                 │
//! │               ├── Hero                                       │
//! │               ├── AdFormFields                               │
//! │               └── UploadPanel                                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Build-time constants
//! - [`types`] - Upload view-model (signals over the orchestrator)
//! - [`components`] - UI components
//! - [`services`] - gloo-net backend and file reading

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use snareshare::AdFormData;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;
pub use types::{PageOrchestrator, UploadViewModel};
pub use components::*;
pub use services::*;

// =============================================================================
// Application
// =============================================================================

/// Root component, mounted by the binary entry point.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main class="container">
                <Routes>
                    <Route path="/" view=ShareLinkPage/>
                    <Route path="/advertise" view=AdCampaignPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

/// Upload a project and get a shareable link.
#[component]
fn ShareLinkPage() -> impl IntoView {
    let vm = UploadViewModel::new(None);

    view! {
        <Hero/>
        <UploadPanel vm=vm/>
    }
}

/// Upload a creative and submit the event ad form with it.
#[component]
fn AdCampaignPage() -> impl IntoView {
    let vm = UploadViewModel::new(Some(AdFormData::default()));

    view! {
        <Title text=format!("{} - Promote an event", APP_NAME)/>
        <Hero/>
        <AdFormFields vm=vm/>
        <UploadPanel vm=vm accept=CREATIVE_ACCEPT/>
    }
}
