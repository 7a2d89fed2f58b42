//! Default property bags per component kind.
//!
//! Shared groups are layered the same way for every kind:
//! visible ⊂ disable ⊂ update ⊂ require, plus the base layout properties.

use crate::kind::ComponentKind;
use crate::node::Config;
use serde_json::{json, Map, Value};

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn visible() -> Map<String, Value> {
    object(json!({ "visible": "" }))
}

fn disable() -> Map<String, Value> {
    let mut map = visible();
    map.extend(object(json!({ "disabled": "" })));
    map
}

fn update() -> Map<String, Value> {
    let mut map = disable();
    map.extend(object(json!({ "updateOnChange": false, "listener": "" })));
    map
}

fn require() -> Map<String, Value> {
    let mut map = update();
    map.extend(object(json!({ "required": "", "requiredMessage": "" })));
    map
}

fn base() -> Map<String, Value> {
    object(json!({
        "id": "",
        "alignSelf": "START",
        "lgSpan": "6",
        "mdSpan": "12"
    }))
}

fn layered(own: Value, groups: &[Map<String, Value>]) -> Map<String, Value> {
    let mut map = object(own);
    for group in groups {
        map.extend(group.clone());
    }
    map
}

fn container(props: Map<String, Value>) -> Config {
    Config {
        components: Some(Vec::new()),
        buttons: None,
        props,
    }
}

/// Canonical default config for a kind
pub fn defaults_for(kind: ComponentKind) -> Config {
    match kind {
        ComponentKind::Button => Config::from(layered(
            json!({
                "name": "Action",
                "action": "",
                "variant": "PRIMARY",
                "style": "SOLID",
                "rounded": false,
                "type": "BUTTON",
                "icon": "",
                "processOnlySelf": false,
                "confirmDialog": false,
                "confirmMessage": "",
                "confirmHeader": "",
                "confirmSeverity": "WARN",
                "confirmCancelValue": "",
                "confirmOkValue": ""
            }),
            &[disable(), base()],
        )),
        ComponentKind::Checkbox => Config::from(layered(
            json!({ "label": "Label", "selected": "true" }),
            &[update(), base()],
        )),
        ComponentKind::Combobox => Config::from(layered(
            json!({
                "label": "Combobox",
                "value": "",
                "completeMethod": "",
                "itemLabel": "",
                "itemValue": "",
                "withDropdown": false
            }),
            &[require(), base()],
        )),
        ComponentKind::Composite => Config::from(layered(
            json!({ "name": "", "startMethod": "", "parameters": {} }),
            &[base()],
        )),
        ComponentKind::DataTable => container(layered(
            json!({
                "value": "",
                "isEditable": false,
                "addButton": false,
                "editDialogId": "",
                "paginator": false,
                "resizableColumns": true,
                "maxRows": "10"
            }),
            &[update(), base()],
        )),
        ComponentKind::DataTableColumn => container(layered(
            json!({
                "header": "Header",
                "value": "#{currentRow}",
                "asActionColumn": false,
                "actionColumnAsMenu": false,
                "sortable": false,
                "filterable": false,
                "actionButtonAlignment": "END",
                "width": ""
            }),
            &[visible()],
        )),
        ComponentKind::DatePicker => Config::from(layered(
            json!({
                "label": "Date Picker",
                "value": "",
                "datePattern": "dd.MM.yyyy",
                "timePattern": "HH:mm",
                "showTime": false
            }),
            &[require(), base()],
        )),
        ComponentKind::Dialog => Config {
            components: Some(Vec::new()),
            buttons: Some(Vec::new()),
            props: layered(json!({ "header": "", "linkedComponent": "" }), &[base()]),
        },
        ComponentKind::Fieldset => container(layered(
            json!({ "legend": "Title", "collapsible": false, "collapsed": false }),
            &[visible(), base()],
        )),
        ComponentKind::Input => Config::from(layered(
            json!({
                "label": "Input",
                "value": "",
                "type": "TEXT",
                "decimalPlaces": "",
                "symbol": "",
                "symbolPosition": "s",
                "validationMessage": "Invalid E-Mail"
            }),
            &[require(), base()],
        )),
        ComponentKind::Layout => container(layered(
            json!({ "type": "GRID", "justifyContent": "NORMAL", "gridVariant": "GRID2" }),
            &[visible(), base()],
        )),
        ComponentKind::Link => Config::from(layered(
            json!({ "name": "Link", "href": "" }),
            &[visible(), base()],
        )),
        ComponentKind::Panel => container(layered(
            json!({ "title": "Title", "collapsible": false, "collapsed": false }),
            &[visible(), base()],
        )),
        ComponentKind::Radio => Config::from(layered(
            json!({
                "label": "Radio",
                "orientation": "horizontal",
                "value": "",
                "staticItems": [
                    { "label": "Option 1", "value": "Option 1" },
                    { "label": "Option 2", "value": "Option 2" }
                ],
                "dynamicItemsList": "",
                "dynamicItemsLabel": "#{item}",
                "dynamicItemsValue": "#{item}"
            }),
            &[require(), base()],
        )),
        ComponentKind::Select => Config::from(layered(
            json!({
                "label": "Select",
                "value": "",
                "staticItems": [],
                "dynamicItemsList": "",
                "dynamicItemsLabel": "#{item}",
                "dynamicItemsValue": "#{item}"
            }),
            &[require(), base()],
        )),
        ComponentKind::Text => Config::from(layered(
            json!({
                "icon": "",
                "content": "This is a Text",
                "type": "RAW",
                "iconStyle": "INLINE"
            }),
            &[visible(), base()],
        )),
        ComponentKind::Textarea => Config::from(layered(
            json!({ "label": "Textarea", "value": "", "rows": "5", "autoResize": true }),
            &[require(), base()],
        )),
    }
}

/// Defaults with `overrides` shallow-merged on top
pub fn instantiate(kind: ComponentKind, overrides: Option<Config>) -> Config {
    let mut config = defaults_for(kind);
    if let Some(overrides) = overrides {
        config.merge(overrides);
    }
    config
}
