use common::{DepartmentDto, SystemDto};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub systems: Vec<SystemDto>,
    pub departments: Vec<DepartmentDto>,
    pub selected_system: Option<String>,
    pub selected_department: Option<String>,
    pub on_system_change: Callback<Option<String>>,
    pub on_department_change: Callback<Option<String>>,
}

/// The two filter dropdowns. The empty option means "no filter"; both
/// filters combine with AND on the server.
#[function_component(FilterBar)]
pub fn filter_bar(props: &Props) -> Html {
    let on_system_change = {
        let on_change = props.on_system_change.clone();
        Callback::from(move |e: Event| {
            if let Some(target) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                let value = target.value();
                on_change.emit(if value.is_empty() { None } else { Some(value) });
            }
        })
    };

    let on_department_change = {
        let on_change = props.on_department_change.clone();
        Callback::from(move |e: Event| {
            if let Some(target) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                let value = target.value();
                on_change.emit(if value.is_empty() { None } else { Some(value) });
            }
        })
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body flex-row flex-wrap gap-4">
                <div class="form-control">
                    <label class="label" for="system-filter">
                        <span class="label-text">{"System"}</span>
                    </label>
                    <select
                        id="system-filter"
                        class="select select-bordered select-sm"
                        onchange={on_system_change}
                    >
                        <option value="" selected={props.selected_system.is_none()}>
                            {"All systems"}
                        </option>
                        { for props.systems.iter().map(|s| {
                            let selected = props.selected_system.as_deref() == Some(s.system_name.as_str());
                            html! {
                                <option value={s.system_name.clone()} selected={selected}>
                                    { &s.system_name }
                                </option>
                            }
                        })}
                    </select>
                </div>
                <div class="form-control">
                    <label class="label" for="department-filter">
                        <span class="label-text">{"Department"}</span>
                    </label>
                    <select
                        id="department-filter"
                        class="select select-bordered select-sm"
                        onchange={on_department_change}
                    >
                        <option value="" selected={props.selected_department.is_none()}>
                            {"All departments"}
                        </option>
                        { for props.departments.iter().map(|d| {
                            let selected = props.selected_department.as_deref() == Some(d.department_name.as_str());
                            html! {
                                <option value={d.department_name.clone()} selected={selected}>
                                    { &d.department_name }
                                </option>
                            }
                        })}
                    </select>
                </div>
            </div>
        </div>
    }
}
