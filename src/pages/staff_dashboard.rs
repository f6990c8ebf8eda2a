//! Staff Dashboard Page
//!
//! Admin-only staff management: create, edit (modal), and delete staff
//! members. The list is re-fetched after every mutation.

use leptos::*;
use leptos_router::*;

use crate::api::{self, StaffMember, StaffPayload};
use crate::components::{InputField, Loading};
use crate::state::{Identity, Notices, Session};

/// Staff dashboard page component
#[component]
pub fn StaffDashboard() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let notices = use_context::<Notices>().expect("Notices not found");

    let (staff_list, set_staff_list) = create_signal(Vec::<StaffMember>::new());
    let (loading, set_loading) = create_signal(true);

    // Create form
    let new_name = create_rw_signal(String::new());
    let new_email = create_rw_signal(String::new());
    let new_password = create_rw_signal(String::new());
    let new_role = create_rw_signal("staff".to_string());

    // Edit modal; None while closed
    let edit_target = create_rw_signal(None::<u32>);
    let edit_name = create_rw_signal(String::new());
    let edit_email = create_rw_signal(String::new());
    let edit_password = create_rw_signal(String::new());
    let edit_role = create_rw_signal("staff".to_string());

    let acting_id = move || session.identity.get().staff_id().map(str::to_string);
    let is_admin = move || session.identity.get().is_admin();

    let reload = move || {
        let Some(id) = acting_id() else {
            set_loading.set(false);
            return;
        };
        spawn_local(async move {
            match api::fetch_staff_list(&id).await {
                Ok(list) => set_staff_list.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch staff list: {}", e).into());
                    notices.show_error(&e.to_string());
                }
            }
            set_loading.set(false);
        });
    };

    create_effect(move |_| {
        if is_admin() {
            reload();
        } else {
            set_loading.set(false);
        }
    });

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = acting_id() else { return };

        let payload = StaffPayload {
            name: new_name.get_untracked(),
            email: new_email.get_untracked(),
            password: Some(new_password.get_untracked()),
            role: new_role.get_untracked(),
        };
        if payload.name.is_empty() || payload.email.is_empty() {
            notices.show_error("Name and email are required");
            return;
        }

        spawn_local(async move {
            match api::create_staff(&id, &payload).await {
                Ok(()) => {
                    notices.show_success("Staff created successfully");
                    new_name.set(String::new());
                    new_email.set(String::new());
                    new_password.set(String::new());
                    new_role.set("staff".to_string());
                }
                Err(e) => notices.show_error(&e.to_string()),
            }
            reload();
        });
    };

    let open_edit = move |staff: StaffMember| {
        edit_name.set(staff.name);
        edit_email.set(staff.email);
        edit_password.set(String::new());
        edit_role.set(staff.role);
        edit_target.set(Some(staff.staff_id));
    };

    let on_save_edit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = acting_id() else { return };
        let Some(target) = edit_target.get_untracked() else { return };

        let password = edit_password.get_untracked();
        let payload = StaffPayload {
            name: edit_name.get_untracked(),
            email: edit_email.get_untracked(),
            password: (!password.is_empty()).then_some(password),
            role: edit_role.get_untracked(),
        };

        spawn_local(async move {
            match api::update_staff(&id, target, &payload).await {
                Ok(()) => {
                    notices.show_success("Staff updated successfully");
                    edit_target.set(None);
                }
                Err(e) => notices.show_error(&e.to_string()),
            }
            reload();
        });
    };

    let on_delete = move |target: u32| {
        let Some(id) = acting_id() else { return };

        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Are you sure you want to delete this staff member?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        spawn_local(async move {
            match api::delete_staff(&id, target).await {
                Ok(()) => notices.show_success("Staff deleted successfully"),
                Err(e) => notices.show_error(&e.to_string()),
            }
            reload();
        });
    };

    view! {
        <div class="max-w-3xl mx-auto space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Staff Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Manage staff members and their roles"</p>
            </div>

            {move || {
                match session.identity.get() {
                    Identity::Staff { .. } if is_admin() => ().into_view(),
                    Identity::Staff { .. } => view! {
                        <div class="bg-red-900/20 border border-red-500/30 rounded-lg p-6 text-center">
                            <p class="text-red-400">"Unauthorized: Admin access required."</p>
                        </div>
                    }.into_view(),
                    _ => view! {
                        <div class="text-center py-12">
                            <p class="text-gray-400 mb-4">"Please log in to access the staff dashboard."</p>
                            <A href="/staff/login" class="text-yellow-400 hover:text-yellow-300">
                                "Go to Staff Login"
                            </A>
                        </div>
                    }.into_view(),
                }
            }}

            {move || {
                is_admin().then(|| {
                    let on_create = on_create.clone();
                    view! {
                        // Create staff form
                        <section class="bg-gray-800 rounded-xl p-6 space-y-4">
                            <h2 class="text-xl font-semibold">"Create New Staff"</h2>
                            <form on:submit=on_create class="space-y-4">
                                <div class="grid md:grid-cols-2 gap-4">
                                    <InputField label="Name" value=new_name placeholder="Staff name" />
                                    <InputField label="Email" input_type="email" value=new_email
                                        placeholder="staff@awestore.com" />
                                    <InputField label="Password" input_type="password" value=new_password />
                                    <div>
                                        <label class="block text-sm font-medium text-gray-700">"Role"</label>
                                        <select
                                            class="mt-1 block w-full border border-gray-300 rounded-lg p-2"
                                            on:change=move |ev| new_role.set(event_target_value(&ev))
                                        >
                                            <option value="staff" selected=move || new_role.get() == "staff">"Staff"</option>
                                            <option value="admin" selected=move || new_role.get() == "admin">"Admin"</option>
                                        </select>
                                    </div>
                                </div>
                                <button
                                    type="submit"
                                    class="w-full py-3 bg-yellow-500 hover:bg-yellow-400 text-gray-900 rounded-lg font-semibold"
                                >
                                    "Create Staff"
                                </button>
                            </form>
                        </section>

                        // Staff list
                        <section class="bg-gray-800 rounded-xl p-6 space-y-4">
                            <h2 class="text-xl font-semibold">"Staff Members"</h2>
                            {move || {
                                if loading.get() {
                                    return view! { <Loading /> }.into_view();
                                }
                                let list = staff_list.get();
                                if list.is_empty() {
                                    return view! {
                                        <p class="text-gray-400 text-center py-6">"No staff members found."</p>
                                    }.into_view();
                                }
                                list.into_iter().map(|staff| {
                                    let staff_id = staff.staff_id;
                                    let staff_for_edit = staff.clone();
                                    view! {
                                        <div class="flex items-center justify-between bg-gray-700/40 rounded-lg p-4">
                                            <div>
                                                <p class="font-medium">{staff.name.clone()}</p>
                                                <p class="text-gray-400 text-sm">{staff.email.clone()}</p>
                                            </div>
                                            <div class="flex items-center space-x-4">
                                                <div class="text-right text-sm text-gray-400">
                                                    <p class="capitalize">{format!("Role: {}", staff.role)}</p>
                                                    <p>{format!("Joined: {}", staff.joined_on())}</p>
                                                </div>
                                                <button
                                                    class="px-3 py-1 bg-blue-600/30 text-blue-300 rounded hover:bg-blue-600/50"
                                                    on:click=move |_| open_edit(staff_for_edit.clone())
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="px-3 py-1 bg-red-600/30 text-red-300 rounded hover:bg-red-600/50"
                                                    on:click=move |_| on_delete(staff_id)
                                                >
                                                    "Delete"
                                                </button>
                                            </div>
                                        </div>
                                    }
                                }).collect_view().into_view()
                            }}
                        </section>
                    }
                })
            }}

            // Edit modal
            {move || {
                edit_target.get().map(|_| {
                    let on_save_edit = on_save_edit.clone();
                    view! {
                        <div class="fixed inset-0 bg-black/60 flex items-center justify-center z-50">
                            <div class="bg-gray-800 rounded-xl p-8 max-w-md w-full mx-4 space-y-4">
                                <h2 class="text-xl font-semibold">"Edit Staff"</h2>
                                <form on:submit=on_save_edit class="space-y-4">
                                    <InputField label="Name" value=edit_name />
                                    <InputField label="Email" input_type="email" value=edit_email />
                                    <InputField label="Password (optional)" input_type="password"
                                        value=edit_password placeholder="Leave blank to keep current" />
                                    <div>
                                        <label class="block text-sm font-medium text-gray-700">"Role"</label>
                                        <select
                                            class="mt-1 block w-full border border-gray-300 rounded-lg p-2"
                                            on:change=move |ev| edit_role.set(event_target_value(&ev))
                                        >
                                            <option value="staff" selected=move || edit_role.get() == "staff">"Staff"</option>
                                            <option value="admin" selected=move || edit_role.get() == "admin">"Admin"</option>
                                        </select>
                                    </div>
                                    <div class="flex space-x-4">
                                        <button
                                            type="submit"
                                            class="flex-1 py-3 bg-yellow-500 hover:bg-yellow-400 text-gray-900 rounded-lg font-semibold"
                                        >
                                            "Update Staff"
                                        </button>
                                        <button
                                            type="button"
                                            class="flex-1 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium"
                                            on:click=move |_| edit_target.set(None)
                                        >
                                            "Cancel"
                                        </button>
                                    </div>
                                </form>
                            </div>
                        </div>
                    }
                })
            }}
        </div>
    }
}
