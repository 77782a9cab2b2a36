use super::macros::code_enum;

code_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub enum LeaveType {
        Pl => "PL",
        Cl => "CL",
        Sl => "SL",
        Maternity => "MATERNITY",
        Paternity => "PATERNITY",
        Adoption => "ADOPTION",
        Sabbatical => "SABBATICAL",
        Wfh => "WFH",
        Bereavement => "BEREAVEMENT",
        Parental => "PARENTAL",
        CompOff => "COMP_OFF",
        Lwp => "LWP",
        Vacation => "VACATION",
    }
}

code_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Gender {
        Male => "MALE",
        Female => "FEMALE",
        Other => "OTHER",
    }
}

code_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum LeaveStatus {
        Pending => "PENDING",
        Approved => "APPROVED",
        Rejected => "REJECTED",
    }
}

code_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Role {
        Employee => "employee",
        Hr => "hr",
        Hod => "hod",
    }
}

impl LeaveType {
    /// Unpaid or unlimited types that never draw from a balance.
    pub fn is_balance_exempt(&self) -> bool {
        matches!(self, LeaveType::Lwp | LeaveType::Vacation)
    }

    pub fn is_paid(&self) -> bool {
        *self != LeaveType::Lwp
    }

    /// Whether the type is offered to an employee of the given gender.
    pub fn is_selectable_for(&self, gender: Gender) -> bool {
        match self {
            LeaveType::Maternity => gender == Gender::Female,
            LeaveType::Paternity => gender == Gender::Male,
            _ => true,
        }
    }

    /// The choices a leave form should offer, in catalogue order.
    pub fn selectable_for(gender: Gender) -> Vec<LeaveType> {
        Self::ALL
            .iter()
            .copied()
            .filter(|leave_type| leave_type.is_selectable_for(gender))
            .collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaveType::Pl => "Privilege Leave",
            LeaveType::Cl => "Casual Leave",
            LeaveType::Sl => "Sick Leave",
            LeaveType::Maternity => "Maternity Leave",
            LeaveType::Paternity => "Paternity Leave",
            LeaveType::Adoption => "Adoption Leave",
            LeaveType::Sabbatical => "Sabbatical",
            LeaveType::Wfh => "Work From Home",
            LeaveType::Bereavement => "Bereavement Leave",
            LeaveType::Parental => "Parental Leave",
            LeaveType::CompOff => "Compensatory Off",
            LeaveType::Lwp => "Leave Without Pay",
            LeaveType::Vacation => "Vacation",
        }
    }
}

impl LeaveStatus {
    /// Approval and rejection are terminal; nothing returns to pending.
    pub fn can_transition_to(&self, next: LeaveStatus) -> bool {
        matches!(
            (self, next),
            (LeaveStatus::Pending, LeaveStatus::Approved)
                | (LeaveStatus::Pending, LeaveStatus::Rejected)
        )
    }

    pub fn is_terminal(&self) -> bool {
        *self != LeaveStatus::Pending
    }
}

impl Role {
    /// Roles whose holders decide leave requests.
    pub const APPROVERS: [Role; 2] = [Role::Hr, Role::Hod];
}
