use crate::model::User;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct UserSelectProps {
    pub users: Vec<User>,
    pub selected: Option<u32>,
    pub on_select: Callback<Option<u32>>,
}

#[function_component(UserSelect)]
pub fn user_select(props: &UserSelectProps) -> Html {
    let onchange = {
        let cb = props.on_select.clone();
        Callback::from(move |e: Event| {
            let value = e
                .target_dyn_into::<HtmlSelectElement>()
                .and_then(|sel| sel.value().parse::<u32>().ok());
            cb.emit(value);
        })
    };
    html! {
        <select id="user_id" {onchange} style="padding:4px 8px; min-width:200px;">
            <option value="" selected={props.selected.is_none()}>{"--"}</option>
            { for props.users.iter().map(|u| html! {
                <option value={u.user_id.to_string()} selected={props.selected == Some(u.user_id)}>{ u.name.clone() }</option>
            }) }
        </select>
    }
}
