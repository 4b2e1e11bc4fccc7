use crate::notice::Notice;
use chrono::NaiveDate;
use log::info;
use shared::models::member::filter_members;
use shared::session_window::today;
use shared::{Member, MemberForm, Result, SharedError};

/// Members screen. The roster is held locally and edited in place.
#[derive(Debug, Default)]
pub struct MembersScreen {
    members: Vec<Member>,
    query: String,
    editing: Option<Member>,
    deleting: Option<Member>,
}

impl MembersScreen {
    pub fn new(members: Vec<Member>) -> Self {
        Self {
            members,
            ..Self::default()
        }
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Members matching the current search query
    pub fn visible(&self) -> Vec<&Member> {
        filter_members(&self.members, &self.query)
    }

    /// Footer text, e.g. "Showing 2 of 6 members"
    pub fn summary(&self) -> String {
        format!("Showing {} of {} members", self.visible().len(), self.members.len())
    }

    pub fn open_create(&mut self) -> MemberForm {
        self.editing = None;
        MemberForm::open(None)
    }

    pub fn open_edit(&mut self, id: i64) -> Result<MemberForm> {
        let member = self.find(id)?.clone();
        let form = MemberForm::open(Some(&member));
        self.editing = Some(member);
        Ok(form)
    }

    pub fn save(&mut self, form: MemberForm) -> Notice {
        self.save_on(form, today())
    }

    pub fn save_on(&mut self, form: MemberForm, today: NaiveDate) -> Notice {
        let editing = self.editing.take();
        let member = form.into_member(editing.as_ref(), today);
        let name = member.name.clone();

        match editing {
            Some(previous) => {
                if let Some(slot) = self.members.iter_mut().find(|m| m.id == previous.id) {
                    *slot = member;
                }
                info!("Updated member {}", previous.id);
                Notice::success("Member updated", format!("{} has been updated successfully.", name))
            }
            None => {
                info!("Added member {}", member.id);
                self.members.push(member);
                Notice::success("Member added", format!("{} has been added successfully.", name))
            }
        }
    }

    pub fn request_delete(&mut self, id: i64) -> Result<()> {
        self.deleting = Some(self.find(id)?.clone());
        Ok(())
    }

    pub fn confirm_delete(&mut self) -> Option<Notice> {
        let member = self.deleting.take()?;
        self.members.retain(|m| m.id != member.id);
        info!("Removed member {}", member.id);
        Some(Notice::success(
            "Member deleted",
            format!("{} has been removed.", member.name),
        ))
    }

    fn find(&self, id: i64) -> Result<&Member> {
        self.members
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| SharedError::NotFound(format!("member {}", id)))
    }
}
