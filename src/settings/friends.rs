//! Friend management views.

/// Pages in a friend management list.
pub const FRIEND_LIST_PAGES: usize = 3;

/// Which friend list is being managed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FriendList {
    /// Friends the user blocked
    Blocked,
    /// Friends hidden from the user's list
    Hidden,
}

impl FriendList {
    /// Get all lists in card order.
    pub fn all() -> &'static [FriendList] {
        &[FriendList::Blocked, FriendList::Hidden]
    }

    /// Card title.
    pub fn title(&self) -> &'static str {
        match self {
            FriendList::Blocked => "Blocked friends",
            FriendList::Hidden => "Hidden friends",
        }
    }

    /// Card description.
    pub fn description(&self) -> &'static str {
        match self {
            FriendList::Blocked => "Block friends you don't\nwant and manage them",
            FriendList::Hidden => "Review and manage friends\nyou hid from your list",
        }
    }
}
