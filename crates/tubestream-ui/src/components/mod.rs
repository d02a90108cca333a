pub(crate) mod atoms;
pub(crate) mod category_bar;
pub(crate) mod navbar;
pub(crate) mod shell;
pub(crate) mod sidebar;
pub(crate) mod toast;
pub(crate) mod toggles;
pub(crate) mod video_card;
pub(crate) mod video_list;
