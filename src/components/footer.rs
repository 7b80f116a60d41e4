//! Site footer.

use leptos::prelude::*;

use crate::state::tenant::TenantSession;

#[component]
pub fn Footer() -> impl IntoView {
    let tenant = expect_context::<TenantSession>();
    let name = if tenant.company_name.is_empty() {
        tenant.subdomain
    } else {
        tenant.company_name
    };

    view! {
        <footer class="footer">
            <span>{format!("© {name}")}</span>
            <a href="/host/login">"Host Login"</a>
        </footer>
    }
}
