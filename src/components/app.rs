use super::{
    avatar_frame::AvatarFrame,
    presence_tables::{MeanTimeTable, PresenceWeekdayTable, StartEndTable},
    user_select::UserSelect,
};
use crate::avatar::{ImageContainer, change_image_file_name};
use crate::config::AppConfig;
use crate::model::PresenceData;
use web_sys::HtmlElement;
use yew::prelude::*;

fn load_config() -> AppConfig {
    web_sys::window()
        .and_then(|win| win.document())
        .map(|doc| AppConfig::from_document(&doc))
        .unwrap_or_default()
}

fn load_data(config: &AppConfig) -> PresenceData {
    let Some(doc) = web_sys::window().and_then(|win| win.document()) else {
        return PresenceData::default();
    };
    match PresenceData::from_document(&doc, &config.data_element_id) {
        Ok(data) => {
            log::info!("loaded presence data for {} users", data.users.len());
            data
        }
        Err(err) => {
            log::error!("could not load presence data: {}", err);
            PresenceData::default()
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    // Host page content is static, read it once
    let config = use_memo((), |_| load_config());
    let data = {
        let config = config.clone();
        use_memo((), move |_| load_data(&config))
    };
    let selected = use_state(|| None::<u32>);
    let avatar_ref = use_node_ref();

    let on_select = {
        let config = config.clone();
        let data = data.clone();
        let selected = selected.clone();
        let avatar_ref = avatar_ref.clone();
        Callback::from(move |user_id: Option<u32>| {
            selected.set(user_id);
            let Some(user_id) = user_id else {
                return;
            };
            match data.user(user_id) {
                Some(user) => log::debug!("user {} ({}) selected", user_id, user.name),
                None => log::warn!("selected user {} is not in the presence data", user_id),
            }
            if let Some(el) = avatar_ref.cast::<HtmlElement>() {
                change_image_file_name(&config.avatar, &ImageContainer(el), user_id);
            }
        })
    };

    let tables = match *selected {
        Some(user_id) => html! {<>
            <PresenceWeekdayTable rows={data.presence_weekday(user_id).to_vec()} />
            <MeanTimeTable rows={data.mean_time(user_id).to_vec()} />
            <StartEndTable rows={data.start_end(user_id).to_vec()} />
        </>},
        None => html! {},
    };

    html! {
        <ContextProvider<AppConfig> context={(*config).clone()}>
            <div style="padding:16px 20px; display:flex; flex-direction:column; gap:10px; font-size:14px;">
                <h2 style="margin:0; color:#58a6ff;">{"Presence analyzer"}</h2>
                <UserSelect users={data.users.clone()} selected={*selected} {on_select} />
                <AvatarFrame container_ref={avatar_ref.clone()} />
                { tables }
            </div>
        </ContextProvider<AppConfig>>
    }
}
