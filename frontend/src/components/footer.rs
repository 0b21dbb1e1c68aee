//! Footer component

use leptos::*;
use leptos_router::A;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div class="coming-soon">
                "🔒 Sign in & project history: " <strong>"coming soon"</strong>
                <br/>
                "Free to use for now 🚀"
            </div>
            <div class="footer-links">
                <A href="/" class="footer-link">"Share a project"</A>
                <A href="/advertise" class="footer-link">"Promote an event"</A>
            </div>
            <div>"Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
        </footer>
    }
}
