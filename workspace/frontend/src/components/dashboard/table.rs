use common::{SortColumn, SortOrder, SortState, UtilizationRecord};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub records: Vec<UtilizationRecord>,
    pub sort: SortState,
    pub on_sort: Callback<SortColumn>,
}

/// The observation table. Rows arrive already sorted from the server;
/// header clicks only update the sort state, which triggers a refetch.
#[function_component(UtilizationTable)]
pub fn utilization_table(props: &Props) -> Html {
    if props.records.is_empty() {
        return html! {
            <div class="card bg-base-100 shadow">
                <div class="card-body text-center py-8 text-gray-500">
                    <p>{"No observations match the current filters."}</p>
                </div>
            </div>
        };
    }

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body overflow-x-auto">
                <table class="table table-zebra table-sm">
                    <thead>
                        <tr>
                            {render_sortable_header("System", SortColumn::SystemName, props.sort, props.on_sort.clone())}
                            {render_sortable_header("Department", SortColumn::DepartmentName, props.sort, props.on_sort.clone())}
                            {render_sortable_header("Utilization %", SortColumn::UtilizationPct, props.sort, props.on_sort.clone())}
                            {render_sortable_header("Date", SortColumn::UsageDate, props.sort, props.on_sort.clone())}
                            {render_sortable_header("Time", SortColumn::UsageTime, props.sort, props.on_sort.clone())}
                        </tr>
                    </thead>
                    <tbody>
                        { for props.records.iter().map(|record| html! {
                            <tr>
                                <td>{ &record.system_name }</td>
                                <td>{ &record.department_name }</td>
                                <td>{ format!("{:.1}", record.utilization_pct) }</td>
                                <td>{ &record.usage_date }</td>
                                <td>{ &record.usage_time }</td>
                            </tr>
                        })}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

fn render_sortable_header(
    label: &str,
    column: SortColumn,
    current_sort: SortState,
    on_sort: Callback<SortColumn>,
) -> Html {
    let is_active = current_sort.column == column;
    let icon = if is_active {
        match current_sort.order {
            SortOrder::Asc => html! { <i class="fas fa-sort-up ml-1"></i> },
            SortOrder::Desc => html! { <i class="fas fa-sort-down ml-1"></i> },
        }
    } else {
        html! { <i class="fas fa-sort ml-1 opacity-30"></i> }
    };

    let onclick = {
        let column = column;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_sort.emit(column);
        })
    };

    html! {
        <th class="cursor-pointer hover:bg-base-200 select-none" onclick={onclick}>
            <div class="flex items-center gap-1">
                {label}
                {icon}
            </div>
        </th>
    }
}
