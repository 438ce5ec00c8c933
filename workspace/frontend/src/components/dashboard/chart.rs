use common::{chart_series, UtilizationRecord};
use plotly::common::{Line, LineShape, Mode, Title};
use plotly::{Layout, Scatter};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue);

    #[wasm_bindgen(js_namespace = Plotly)]
    fn purge(div_id: &str);
}

const CHART_DIV_ID: &str = "utilization-chart";
const LINE_COLOR: &str = "rgb(59, 130, 246)";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub records: Vec<UtilizationRecord>,
}

/// Line chart of the current record set, labels and values index-aligned
/// with the table rows. Every render purges the previous plot before
/// drawing, so the chart div never holds more than one live plot.
#[function_component(UtilizationChart)]
pub fn utilization_chart(props: &Props) -> Html {
    let container_ref = use_node_ref();
    let records = props.records.clone();

    use_effect_with(
        (container_ref.clone(), records),
        move |(container_ref, records)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id(CHART_DIV_ID);

                let (labels, values) = chart_series(records);

                let trace = Scatter::new(labels, values)
                    .mode(Mode::Lines)
                    .name("Utilization %")
                    .line(
                        Line::new()
                            .color(LINE_COLOR)
                            .width(2.0)
                            .shape(LineShape::Spline)
                            .smoothing(0.1),
                    );

                let layout = Layout::new()
                    .title(Title::with_text("System Utilization Over Time"))
                    .x_axis(plotly::layout::Axis::new().title(Title::with_text("Observation")))
                    .y_axis(plotly::layout::Axis::new().title(Title::with_text("Utilization %")))
                    .height(400);

                let trace_json = serde_json::to_string(&trace).unwrap();
                let trace_js = js_sys::JSON::parse(&trace_json).unwrap();

                let data_js = js_sys::Array::new();
                data_js.push(&trace_js);

                let layout_json = serde_json::to_string(&layout).unwrap();
                let layout_js = js_sys::JSON::parse(&layout_json).unwrap();

                // Tear down the previous plot before drawing the new one.
                purge(CHART_DIV_ID);
                newPlot(CHART_DIV_ID, data_js.into(), layout_js);
            }
            // On unmount the div may already be detached; Plotly.purge on a
            // missing id throws, so only purge while the element is present.
            || {
                let still_mounted = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.get_element_by_id(CHART_DIV_ID))
                    .is_some();
                if still_mounted {
                    purge(CHART_DIV_ID);
                }
            }
        },
    );

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div ref={container_ref} style="width:100%; height:400px;"></div>
            </div>
        </div>
    }
}
