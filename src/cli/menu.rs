//! `stickynav menu`: evaluate the `menu_item` helper from the shell.

use crate::{
    debug,
    helper::{Helpers, MenuItemAttrs, PageRequest},
};
use anyhow::Result;

pub fn run_menu(target: &str, current: &str, json: bool) -> Result<()> {
    println!("{}", render(target, current, json)?);
    Ok(())
}

fn render(target: &str, current: &str, json: bool) -> Result<String> {
    let page = PageRequest::new(current);
    let attrs: MenuItemAttrs = Helpers::new(&page).menu_item(target);
    debug!("menu"; "/{} active on '{}': {}", target, current, attrs.is_active());
    Ok(if json {
        serde_json::to_string(&attrs)?
    } else {
        attrs.to_html()
    })
}
