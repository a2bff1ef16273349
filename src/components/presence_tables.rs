use crate::model::{WeekdayRow, StartEndRow};
use crate::util::format_interval;
use yew::prelude::*;

const TABLE_STYLE: &str = "border-collapse:collapse; margin:8px 0; min-width:260px;";
const CELL_STYLE: &str = "padding:4px 10px; border-bottom:1px solid #30363d; font-variant-numeric:tabular-nums;";

#[derive(Properties, PartialEq, Clone)]
pub struct PresenceWeekdayTableProps {
    pub rows: Vec<WeekdayRow>,
}

/// Total presence per weekday, shown in raw seconds.
#[function_component(PresenceWeekdayTable)]
pub fn presence_weekday_table(props: &PresenceWeekdayTableProps) -> Html {
    if props.rows.is_empty() {
        return html! {};
    }
    html! {
        <table style={TABLE_STYLE}>
            <caption style="text-align:left; font-weight:600;">{"Presence by weekday"}</caption>
            <tr><th style={CELL_STYLE}>{"Weekday"}</th><th style={CELL_STYLE}>{"Presence (s)"}</th></tr>
            { for props.rows.iter().map(|WeekdayRow(day, secs)| html! {
                <tr>
                    <td style={CELL_STYLE}>{ day.clone() }</td>
                    <td style={CELL_STYLE}>{ secs.to_string() }</td>
                </tr>
            }) }
        </table>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct MeanTimeTableProps {
    pub rows: Vec<WeekdayRow>,
}

#[function_component(MeanTimeTable)]
pub fn mean_time_table(props: &MeanTimeTableProps) -> Html {
    if props.rows.is_empty() {
        return html! {};
    }
    html! {
        <table style={TABLE_STYLE}>
            <caption style="text-align:left; font-weight:600;">{"Presence mean time by weekday"}</caption>
            <tr><th style={CELL_STYLE}>{"Weekday"}</th><th style={CELL_STYLE}>{"Mean time"}</th></tr>
            { for props.rows.iter().map(|WeekdayRow(day, secs)| html! {
                <tr>
                    <td style={CELL_STYLE}>{ day.clone() }</td>
                    <td style={CELL_STYLE}>{ format_interval(*secs) }</td>
                </tr>
            }) }
        </table>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct StartEndTableProps {
    pub rows: Vec<StartEndRow>,
}

#[function_component(StartEndTable)]
pub fn start_end_table(props: &StartEndTableProps) -> Html {
    if props.rows.is_empty() {
        return html! {};
    }
    html! {
        <table style={TABLE_STYLE}>
            <caption style="text-align:left; font-weight:600;">{"Presence start-end weekday"}</caption>
            <tr>
                <th style={CELL_STYLE}>{"Weekday"}</th>
                <th style={CELL_STYLE}>{"Start"}</th>
                <th style={CELL_STYLE}>{"End"}</th>
            </tr>
            { for props.rows.iter().map(|row| html! {
                <tr>
                    <td style={CELL_STYLE}>{ row.weekday().to_string() }</td>
                    <td style={CELL_STYLE}>{ format_interval(row.start()) }</td>
                    <td style={CELL_STYLE}>{ format_interval(row.end()) }</td>
                </tr>
            }) }
        </table>
    }
}
