//! CRM page: paginated, searchable listing of the tenant's users.

use leptos::prelude::*;

use crate::components::host_nav::{HostNav, require_host_session};
use crate::net::api;

const PAGE_SIZE: i64 = 20;

#[component]
pub fn HostCrmPage() -> impl IntoView {
    require_host_session();

    let page = RwSignal::new(0i64);
    let search = RwSignal::new(String::new());
    let sort_by = RwSignal::new("createdAt".to_owned());
    let sort_order = RwSignal::new("desc".to_owned());

    // The resource tracks all four inputs; changing any of them refetches.
    let users = LocalResource::new(move || {
        let page = page.get();
        let search = search.get();
        let sort_by = sort_by.get();
        let sort_order = sort_order.get();
        async move { api::fetch_host_users(page, PAGE_SIZE, &search, &sort_by, &sort_order).await }
    });

    let on_sort = move |column: &'static str| {
        if sort_by.get() == column {
            sort_order.update(|order| {
                *order = if order == "asc" { "desc".to_owned() } else { "asc".to_owned() };
            });
        } else {
            sort_by.set(column.to_owned());
            sort_order.set("asc".to_owned());
        }
        page.set(0);
    };

    view! {
        <HostNav/>
        <main class="page">
            <h1>"Users"</h1>
            <input
                class="crm-search"
                type="search"
                placeholder="Search by name or email"
                prop:value=move || search.get()
                on:input=move |ev| {
                    search.set(event_target_value(&ev));
                    page.set(0);
                }
            />
            <Suspense fallback=move || view! { <p>"Loading users..."</p> }>
                {move || {
                    users.get().map(|result| match result {
                        Ok(batch) => {
                            if batch.data.is_empty() {
                                return view! { <p class="page__empty">"No users found."</p> }
                                    .into_any();
                            }
                            let has_previous = batch.has_previous;
                            let has_next = batch.has_next;
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th on:click=move |_| on_sort("firstName")>"Name"</th>
                                            <th on:click=move |_| on_sort("email")>"Email"</th>
                                            <th>"Phone"</th>
                                            <th>"Verified"</th>
                                            <th>"Email Opt-in"</th>
                                            <th>"SMS Opt-in"</th>
                                            <th on:click=move |_| on_sort("createdAt")>"Joined"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {batch
                                            .data
                                            .into_iter()
                                            .map(|user| {
                                                let name = format!(
                                                    "{} {}",
                                                    user.first_name.unwrap_or_default(),
                                                    user.last_name.unwrap_or_default(),
                                                );
                                                view! {
                                                    <tr>
                                                        <td>{name.trim().to_owned()}</td>
                                                        <td>{user.email}</td>
                                                        <td>{user.phone_number.unwrap_or_default()}</td>
                                                        <td>{yes_no(user.email_verified)}</td>
                                                        <td>{yes_no(user.email_opt_in)}</td>
                                                        <td>{yes_no(user.sms_opt_in)}</td>
                                                        <td>{user.created_at.unwrap_or_default()}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                                <div class="pager">
                                    <button
                                        disabled=!has_previous
                                        on:click=move |_| page.update(|p| *p -= 1)
                                    >
                                        "Previous"
                                    </button>
                                    <span>{format!(
                                        "{} users · page {} of {}",
                                        batch.total_items,
                                        batch.current_page + 1,
                                        batch.total_pages.max(1),
                                    )}</span>
                                    <button
                                        disabled=!has_next
                                        on:click=move |_| page.update(|p| *p += 1)
                                    >
                                        "Next"
                                    </button>
                                </div>
                            }
                            .into_any()
                        }
                        Err(err) => view! { <p class="page__error">{err.message()}</p> }.into_any(),
                    })
                }}
            </Suspense>
        </main>
    }
}

fn yes_no(flag: Option<bool>) -> &'static str {
    match flag {
        Some(true) => "Yes",
        _ => "No",
    }
}
