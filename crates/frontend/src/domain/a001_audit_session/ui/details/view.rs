//! Audit Session Details - View Component

use super::model::HttpAuditApi;
use super::view_model::AuditSessionVm;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

#[component]
#[allow(non_snake_case)]
pub fn AuditSessionDetails() -> impl IntoView {
    let vm = AuditSessionVm::new();
    let api = HttpAuditApi::default();

    // Start the session once on mount; the first clause follows automatically
    Effect::new({
        let api = api.clone();
        move |_| {
            let api = api.clone();
            spawn_local(async move {
                vm.bootstrap(&api).await;
            });
        }
    });

    let handle_query = Callback::new({
        let api = api.clone();
        move |_: ()| {
            let api = api.clone();
            spawn_local(async move {
                vm.submit_query(&api).await;
            });
        }
    });

    let handle_answer = Callback::new({
        let api = api.clone();
        move |_: ()| {
            let api = api.clone();
            spawn_local(async move {
                vm.submit_answer(&api).await;
            });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        handle_answer.run(());
    };

    view! {
        <Show
            when=move || !vm.is_loading.get()
            fallback=|| view! {
                <Flex align=FlexAlign::Center style="gap: 8px; padding: 16px;">
                    <Spinner />
                    <span>"Loading..."</span>
                </Flex>
            }
        >
            <div style="max-width: 32rem; margin: 0 auto; padding: 16px;">
                <h1 style="font-size: 24px; font-weight: bold; margin-bottom: 16px;">
                    "ISO 27001 Internal Auditor"
                </h1>

                // Clause description
                {move || {
                    vm.shows_description().then(|| {
                        let clause = vm.clause.get();
                        let attributes = clause.attributes.clone();
                        view! {
                            <div style="margin-bottom: 16px; padding: 12px; background: var(--colorNeutralBackground2); border-radius: 8px;">
                                <h2 style="font-weight: 600; margin-bottom: 8px;">"Clause Description"</h2>
                                <p style="margin-bottom: 8px;">{clause.description.clone()}</p>
                                {vm.shows_attributes().then(|| view! {
                                    <ul style="list-style: disc inside;">
                                        {attributes
                                            .into_iter()
                                            .map(|attr| view! { <li>{attr}</li> })
                                            .collect_view()}
                                    </ul>
                                })}
                            </div>
                        }
                    })
                }}

                // Query about the current clause
                <div style="margin-bottom: 16px;">
                    <h2 style="font-weight: 600; margin-bottom: 8px;">"Ask about this clause"</h2>
                    <Flex style="gap: 8px; margin-bottom: 8px;">
                        <div style="flex: 1;">
                            <Input
                                value=vm.query
                                placeholder="Your question..."
                                attr:style="width: 100%;"
                            />
                        </div>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| handle_query.run(())
                        >
                            "Ask"
                        </Button>
                    </Flex>
                    {move || {
                        vm.shows_query_response().then(|| view! {
                            <div style="padding: 12px; background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;">
                                <p style="white-space: pre-wrap;">{vm.query_response.get()}</p>
                            </div>
                        })
                    }}
                </div>

                // Current question
                <div style="margin-bottom: 16px;">
                    <h2 style="font-weight: 600; margin-bottom: 8px;">"Audit Question"</h2>
                    <p style="margin-bottom: 8px;">{move || vm.clause.get().question}</p>
                </div>

                <Show
                    when=move || vm.shows_answer_form()
                    fallback=|| view! {
                        <div style="padding: 12px; background: var(--colorNeutralBackground2); border-radius: 8px;">
                            "Audit complete. All clauses have been answered."
                        </div>
                    }
                >
                    <form on:submit=on_submit style="display: flex; gap: 8px;">
                        <input
                            type="text"
                            style="flex: 1; padding: 8px; border: 1px solid var(--colorNeutralStroke1); border-radius: 4px;"
                            placeholder="Type your answer..."
                            prop:value=move || vm.answer.get()
                            on:input=move |ev| vm.answer.set(event_target_value(&ev))
                            required
                        />
                        <Button
                            button_type=ButtonType::Submit
                            appearance=ButtonAppearance::Primary
                        >
                            "Submit"
                        </Button>
                    </form>
                </Show>
            </div>
        </Show>
    }
}
