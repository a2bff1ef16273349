use crate::config::AppConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AvatarFrameProps {
    /// Bound to the container so the parent can hand it to the avatar setter.
    pub container_ref: NodeRef,
}

// Hidden until a user is picked; the avatar setter reveals it and fills in the image.
#[function_component(AvatarFrame)]
pub fn avatar_frame(props: &AvatarFrameProps) -> Html {
    let id = use_context::<AppConfig>()
        .map(|cfg| cfg.image_element_id)
        .unwrap_or_else(|| "image".to_string());
    html! {
        <div {id} ref={props.container_ref.clone()} style="display:none; margin:12px 0;">
            <img alt="avatar" style="width:96px; height:96px; border-radius:8px; border:1px solid #30363d;" />
        </div>
    }
}
