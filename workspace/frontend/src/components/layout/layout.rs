use super::navbar::Navbar;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: String,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="flex flex-col min-h-screen bg-base-200">
            <Navbar title={props.title.clone()} />
            <main class="flex-1 p-6 overflow-y-auto">
                { for props.children.iter() }
            </main>
        </div>
    }
}
