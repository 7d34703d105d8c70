use super::{router::AppRoute, Icon, IconStyle, Notification};
use crate::utils;
use yew::prelude::*;
use yew_router::{
    history::Location,
    prelude::*,
    scope_ext::{HistoryHandle, RouterScopeExt},
};

pub struct MainLayout {
    title: String,
    sider_collapsed: bool,
    dark_mode: bool,
    _history_listener: Option<HistoryHandle>,
}

pub enum Message {
    ToggleSider,
    ToggleTheme,
    RouteChanged,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Children,
}

pub struct MenuEntry {
    pub label: &'static str,
    pub icon: &'static str,
    pub route: AppRoute,
}

pub struct MenuGroup {
    pub label: Option<&'static str>,
    pub entries: Vec<MenuEntry>,
}

fn entry(label: &'static str, icon: &'static str, route: AppRoute) -> MenuEntry {
    MenuEntry { label, icon, route }
}

pub fn menu() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: None,
            entries: vec![
                entry("Dashboard", "dashboard", AppRoute::Dashboard),
                entry(
                    "Real-Time Monitor",
                    "videocam",
                    AppRoute::FactoryMonitor {
                        factory_id: "1".into(),
                    },
                ),
                entry("Factory Real-Time v2", "videocam", AppRoute::FactoryRealtime),
            ],
        },
        MenuGroup {
            label: Some("Video Monitoring"),
            entries: vec![
                entry("Alert Highlight", "visibility", AppRoute::AlertHighlight),
                entry("Focus Zoom", "zoom_in", AppRoute::FocusZoom),
                entry("Multi-Region", "apps", AppRoute::MultiRegion),
            ],
        },
        MenuGroup {
            label: None,
            entries: vec![
                entry("Alerts", "notification_important", AppRoute::Alerts),
                entry("Predictions", "show_chart", AppRoute::Predictions),
                entry("Snapshots", "photo_camera", AppRoute::Snapshots),
            ],
        },
    ]
}

/// Whether a menu entry points at the page currently shown.
pub fn is_active_entry(current_path: Option<&str>, route: &AppRoute) -> bool {
    current_path == Some(route.to_path().as_str())
}

impl MainLayout {
    fn current_path(&self, ctx: &Context<Self>) -> Option<String> {
        ctx.link().location().map(|location| location.pathname())
    }

    fn view_header(&self, ctx: &Context<Self>) -> Html {
        html! {
            <nav class="navbar is-primary" role="navigation">
                <div class="navbar-brand">
                    <a role="button" class="navbar-item" aria-label="menu" onclick={ctx.link().callback(|_| Message::ToggleSider)}>
                        <Icon name="menu" style={IconStyle::Filled}/>
                    </a>
                    <div class="navbar-item title is-4">{&self.title}</div>
                </div>
                <div class="navbar-end">
                    <div class="navbar-item">
                        <Icon name="lightbulb" style={IconStyle::Outlined}/>
                        <button class="button is-small is-rounded" onclick={ctx.link().callback(|_| Message::ToggleTheme)}>
                            {match self.dark_mode {
                                true => "Dark",
                                false => "Light",
                            }}
                        </button>
                    </div>
                </div>
            </nav>
        }
    }

    fn view_menu(&self, ctx: &Context<Self>) -> Html {
        if self.sider_collapsed {
            return html! {};
        }

        let current_path = self.current_path(ctx);

        html! {
            <aside class="menu column is-narrow">
                { menu().into_iter().map(|group| html! {
                    <>
                        {match group.label {
                            Some(label) => html! {<p class="menu-label">{label}</p>},
                            None => html! {},
                        }}
                        <ul class="menu-list">
                            { group.entries.into_iter().map(|entry| {
                                let active = is_active_entry(current_path.as_deref(), &entry.route);
                                html! {
                                    <li>
                                        <Link<AppRoute> to={entry.route} classes={classes!(active.then(|| "is-active"))}>
                                            <Icon name={entry.icon} style={IconStyle::Outlined}/>
                                            {entry.label}
                                        </Link<AppRoute>>
                                    </li>
                                }
                            }).collect::<Html>() }
                        </ul>
                    </>
                }).collect::<Html>() }
            </aside>
        }
    }
}

impl Component for MainLayout {
    type Message = Message;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let config = utils::config_of(ctx);
        let history_listener = ctx
            .link()
            .add_history_listener(ctx.link().callback(|_| Message::RouteChanged));

        Self {
            title: config.title,
            sider_collapsed: config.sider_collapsed,
            dark_mode: config.dark_mode,
            _history_listener: history_listener,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::ToggleSider => self.sider_collapsed = !self.sider_collapsed,
            Message::ToggleTheme => {
                self.dark_mode = !self.dark_mode;
                log::info!("theme switched to {}", match self.dark_mode {
                    true => "dark",
                    false => "light",
                });
            }
            Message::RouteChanged => {}
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let theme = match self.dark_mode {
            true => "theme-dark",
            false => "theme-light",
        };

        html! {
            <div class={classes!("layout", theme)}>
                { self.view_header(ctx) }
                <div class="columns is-gapless">
                    { self.view_menu(ctx) }
                    <main class="column section">
                        <Notification/>
                        { for ctx.props().children.iter() }
                    </main>
                </div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_lists_every_page_once() {
        let paths: Vec<String> = menu()
            .into_iter()
            .flat_map(|group| group.entries.into_iter().map(|e| e.route.to_path()))
            .collect();

        assert_eq!(
            paths,
            vec![
                "/",
                "/monitor/1",
                "/factory-realtime-v2",
                "/video/alert",
                "/video/focus",
                "/video/multi",
                "/alerts",
                "/predictions",
                "/snapshots"
            ]
        );
    }

    #[test]
    fn entry_matching_the_location_is_active() {
        let monitor = AppRoute::FactoryMonitor {
            factory_id: "1".into(),
        };

        assert!(is_active_entry(Some("/monitor/1"), &monitor));
        assert!(!is_active_entry(Some("/monitor/2"), &monitor));
        assert!(!is_active_entry(None, &AppRoute::Dashboard));
        assert!(is_active_entry(Some("/"), &AppRoute::Dashboard));
    }

    #[test]
    fn video_pages_are_grouped() {
        let groups = menu();

        assert_eq!(groups[1].label, Some("Video Monitoring"));
        assert_eq!(groups[1].entries.len(), 3);
    }
}
