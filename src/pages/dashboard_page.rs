use crate::{
    components::{router::AppRoute, StatCard},
    objects::factory::{mock_factories, Factory},
};
use yew::prelude::*;
use yew_router::prelude::*;

pub struct DashboardPage {
    factories: Vec<Factory>,
}

impl DashboardPage {
    fn view_factory(&self, factory: &Factory) -> Html {
        html! {
            <tr key={factory.id.clone()}>
                <td>{&factory.name}</td>
                <td><span class={classes!("tag", factory.status.color())}>{factory.status.label()}</span></td>
                <td>{&factory.last_inspection}</td>
                <td>{factory.alerts.to_string()}</td>
                <td>{factory.predictions.to_string()}</td>
                <td>
                    <div class="buttons are-small">
                        <Link<AppRoute> classes={classes!("button", "is-link", "is-light")} to={AppRoute::FactoryMonitor { factory_id: factory.id.clone() }}>{"Monitor"}</Link<AppRoute>>
                        <Link<AppRoute> classes={classes!("button", "is-light")} to={AppRoute::Alerts}>{"View Alerts"}</Link<AppRoute>>
                    </div>
                </td>
            </tr>
        }
    }
}

impl Component for DashboardPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            factories: mock_factories(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <>
                <div class="columns">
                    <div class="column"><StatCard title="Pending Alerts" value="8" icon="warning" color="#cf1322"/></div>
                    <div class="column"><StatCard title="Inspections Today" value="3" icon="check_circle" color="#3f8600"/></div>
                    <div class="column"><StatCard title="Normal Factories" value="12" icon="check_circle" color="#3f8600"/></div>
                </div>
                <div class="box">
                    <p class="title is-5">{"Factory Overview"}</p>
                    <table class="table is-fullwidth is-hoverable">
                        <thead>
                            <tr>
                                <th>{"Factory Name"}</th>
                                <th>{"Status"}</th>
                                <th>{"Last Inspection"}</th>
                                <th>{"Alerts"}</th>
                                <th>{"Predicted Issues"}</th>
                                <th>{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { self.factories.iter().map(|f| self.view_factory(f)).collect::<Html>() }
                        </tbody>
                    </table>
                </div>
            </>
        }
    }
}
