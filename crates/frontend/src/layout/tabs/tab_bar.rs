//! TabBar component - кнопки переключения панелей
//!
//! Отвечает за:
//! - Кнопку на каждую панель страницы, активная подсвечена
//! - Вызов `BoardContext::switch_to` по клику
//! - Показ последней ошибки переключения

use crate::layout::global_context::BoardContext;
use crate::layout::tabs::tab_labels::reload_badge_label;
use crate::shared::dom_panels::PanelInfo;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TabBar(
    /// Period of the page reload timer, `None` when it is off.
    reload_period_ms: Option<u32>,
) -> impl IntoView {
    let board = use_context::<BoardContext>().expect("BoardContext not found");

    log!("🔨 TabBar CREATED");
    on_cleanup(|| log!("💥 TabBar DESTROYED"));

    view! {
        <div class="tab-bar">
            <div style="display: flex; align-items: center; justify-content: space-between; gap: 8px;">
                <Space>
                    {view! {
                    <For
                        each=move || board.panels.get()
                        key=|panel| panel.key.clone()
                        children=move |panel: PanelInfo| {
                            let key_for_active = panel.key.clone();
                            let key_for_click = panel.key.clone();
                            let is_active = move || board.is_active(&key_for_active);
                            view! {
                                <Button
                                    appearance=move || if is_active() { ButtonAppearance::Primary } else { ButtonAppearance::Subtle }
                                    on_click=move |_| {
                                        let _ = board.switch_to(&key_for_click);
                                    }
                                >
                                    {panel.title.clone()}
                                </Button>
                            }
                        }
                    />
                    }.into_any()}
                </Space>
                {reload_period_ms.map(|ms| view! {
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {reload_badge_label(ms)}
                    </Badge>
                })}
            </div>
            {move || board.last_error.get().map(|msg| view! {
                <div style="margin-top: 8px;">
                    <MessageBar intent=MessageBarIntent::Error>
                        {msg}
                    </MessageBar>
                </div>
            })}
        </div>
    }
}
