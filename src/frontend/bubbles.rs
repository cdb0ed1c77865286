use crate::bubbles::{generate, BubbleColor};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FloatingBubblesProps {
    pub count: usize,
    #[prop_or_default]
    pub color: BubbleColor,
}

#[function_component(FloatingBubbles)]
pub fn floating_bubbles(props: &FloatingBubblesProps) -> Html {
    let bubbles = use_memo((props.count, props.color), |(count, color)| generate(*count, *color));

    html! {
        <div class="bubbles" aria-hidden="true">
            { for bubbles.iter().map(|bubble| html! {
                <span
                    key={bubble.index}
                    class={classes!("bubble", bubble.tone.class())}
                    style={bubble.style()}
                />
            }) }
        </div>
    }
}
