use common::{SortColumn, SortState, UtilizationQuery};
use yew::prelude::*;

use super::chart::UtilizationChart;
use super::filter_bar::FilterBar;
use super::table::UtilizationTable;
use crate::api_client::reference::{get_departments, get_systems};
use crate::api_client::utilization::get_utilization;
use crate::common::fetch_hook::use_fetch_with_deps;
use crate::hooks::FetchState;

/// The utilization dashboard: filter dropdowns, a sortable observation
/// table, and a line chart of the same rows. All filtering and sorting is
/// done server-side; any state change triggers a refetch.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let sort = use_state(SortState::default);
    let selected_system = use_state(|| None::<String>);
    let selected_department = use_state(|| None::<String>);

    let query = UtilizationQuery {
        sort: *sort,
        system: (*selected_system).clone(),
        department: (*selected_department).clone(),
    };

    let (data_state, _refetch) = {
        let query = query.clone();
        use_fetch_with_deps(query.clone(), move || {
            let query = query.clone();
            async move { get_utilization(&query).await }
        })
    };

    // Dropdown options load once. On failure the dropdowns just stay
    // empty; the error is already logged by the fetch hook.
    let (systems_state, _) = use_fetch_with_deps((), get_systems);
    let (departments_state, _) = use_fetch_with_deps((), get_departments);

    let on_sort = {
        let sort = sort.clone();
        Callback::from(move |column: SortColumn| {
            sort.set(sort.click(column));
        })
    };

    let on_system_change = {
        let selected_system = selected_system.clone();
        Callback::from(move |value: Option<String>| {
            log::debug!("System filter changed to {:?}", value);
            selected_system.set(value);
        })
    };

    let on_department_change = {
        let selected_department = selected_department.clone();
        Callback::from(move |value: Option<String>| {
            log::debug!("Department filter changed to {:?}", value);
            selected_department.set(value);
        })
    };

    let systems = systems_state.data().cloned().unwrap_or_default();
    let departments = departments_state.data().cloned().unwrap_or_default();

    html! {
        <div class="space-y-6">
            <FilterBar
                systems={systems}
                departments={departments}
                selected_system={(*selected_system).clone()}
                selected_department={(*selected_department).clone()}
                on_system_change={on_system_change}
                on_department_change={on_department_change}
            />

            {match &*data_state {
                FetchState::Loading => html! {
                    <div class="flex justify-center items-center py-8">
                        <span class="loading loading-spinner loading-lg"></span>
                    </div>
                },
                FetchState::Error(error) => html! {
                    <div class="alert alert-error">
                        <span>{error}</span>
                    </div>
                },
                FetchState::Success(records) => html! {
                    <>
                        <UtilizationChart records={records.clone()} />
                        <UtilizationTable
                            records={records.clone()}
                            sort={*sort}
                            on_sort={on_sort}
                        />
                    </>
                },
                FetchState::NotStarted => html! { <></> },
            }}
        </div>
    }
}
