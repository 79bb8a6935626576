//! Demo mailbox rows for local development.
//!
//! Recorded in the `_migrations` bookkeeping table so the seed applies at
//! most once per database. Opt-in via `POSTBOX_SEED`.

use sqlx::SqlitePool;

struct SeedEmail {
    sender_name: &'static str,
    sender_email: &'static str,
    recipient: &'static str,
    subject: &'static str,
    body: &'static str,
    preview: &'static str,
    created_at: &'static str,
    is_read: i64,
    archived: i64,
    attachments: Option<&'static str>,
}

const SEED_EMAILS: &[SeedEmail] = &[
    SeedEmail {
        sender_name: "Michael Lee",
        sender_email: "michael.lee@business.com",
        recipient: "Richard Brown",
        subject: "Follow-Up: Product Demo Feedback",
        body: "Hi John,\n\nThank you for attending the product demo yesterday. I wanted to follow up and gather your thoughts on the presentation. Your feedback is invaluable as we continue to refine our offering.\n\nPlease let me know if you have any questions or need additional information.\n\nBest regards,\nMichael Lee",
        preview: "Hi John, Thank you for attending the product...",
        created_at: "2024-12-10T09:00:00Z",
        is_read: 0,
        archived: 0,
        attachments: None,
    },
    SeedEmail {
        sender_name: "Jane Doe",
        sender_email: "jane.doe@business.com",
        recipient: "Richard Brown",
        subject: "Proposal for Partnership 🎉",
        body: "Hi John,\n\nhope this message finds you well! I'm reaching out to explore a potential partnership between our companies. At Jane Corp, which could complement your offerings at John Organisation Corp.\n\nI've attached a proposal detailing how we envision our collaboration, including key benefits, timelines, and implementation strategies. I believe this partnership could unlock exciting opportunities for both of us!\n\nLet me know your thoughts or a convenient time to discuss this further. I'm happy to schedule a call or meeting at your earliest convenience. Looking forward to hearing from you!\n\nWarm regards,\nJane Doe",
        preview: "Hi John, Hope this email finds you well. I'm rea...",
        created_at: "2024-12-10T09:00:00Z",
        is_read: 1,
        archived: 0,
        attachments: Some(r##"[{"name": "Proposal Partnership.pdf", "size": "1.5 MB", "url": "#"}]"##),
    },
    SeedEmail {
        sender_name: "Support Team",
        sender_email: "support@business.com",
        recipient: "Richard Brown",
        subject: "Contract Renewal Due 👹",
        body: "Dear John,\n\nThis is a reminder that the contract for your current subscription is due for renewal on December 31, 2024. Please review the terms and let us know if you'd like to make any changes.\n\nIf you have any questions about the renewal process, don't hesitate to reach out.\n\nBest regards,\nSupport Team",
        preview: "Dear John, This is a reminder that the contract...",
        created_at: "2024-12-11T10:30:00Z",
        is_read: 1,
        archived: 0,
        attachments: None,
    },
    SeedEmail {
        sender_name: "Sarah Connor",
        sender_email: "sarah.connor@business.com",
        recipient: "Richard Brown",
        subject: "Meeting Recap: Strategies for 2...",
        body: "Hi John,\n\nThank you for your insights during yesterday's strategy meeting. I've compiled the key takeaways and action items from our discussion.\n\nPlease review the attached summary and let me know if I've missed anything. Looking forward to our next steps.\n\nBest,\nSarah Connor",
        preview: "Hi John, Thank you for your insights during ye...",
        created_at: "2024-12-11T14:00:00Z",
        is_read: 1,
        archived: 0,
        attachments: Some(r##"[{"name": "Meeting-Recap-Q4.pdf", "size": "2.3 MB", "url": "#"}]"##),
    },
    SeedEmail {
        sender_name: "Downe Johnson",
        sender_email: "downe.johnson@business.com",
        recipient: "Richard Brown",
        subject: "Invitation: Annual Client Appreciation Event",
        body: "Dear John,\n\nWe are delighted to invite you to our Annual Client Appreciation Event, taking place on January 15, 2025. It will be a wonderful opportunity to network and celebrate our achievements together.\n\nPlease RSVP by December 20 to confirm your attendance.\n\nWarm regards,\nDowne Johnson",
        preview: "Dear John, We are delighted to invite you to a...",
        created_at: "2024-12-11T08:15:00Z",
        is_read: 1,
        archived: 0,
        attachments: None,
    },
    SeedEmail {
        sender_name: "Lily Alexa",
        sender_email: "lily.alexa@business.com",
        recipient: "Richard Brown",
        subject: "Technical Support Update",
        body: "Dear John,\n\nYour issue regarding server connectivity has been resolved. Our engineering team identified and fixed a configuration issue that was causing intermittent disconnections.\n\nPlease verify on your end and let us know if you experience any further issues.\n\nBest regards,\nLily Alexa",
        preview: "Dear John, Your issue regarding server conne...",
        created_at: "2024-12-10T16:45:00Z",
        is_read: 1,
        archived: 0,
        attachments: None,
    },
    SeedEmail {
        sender_name: "Natasha Brown",
        sender_email: "natasha.brown@business.com",
        recipient: "Richard Brown",
        subject: "Happy Holidays from Kozuki tea...",
        body: "Hi John,\n\nAs the holiday season approaches, we wanted to take a moment to express our gratitude for your continued partnership. Wishing you and your team a joyful holiday season and a prosperous New Year!\n\nWarm wishes,\nNatasha Brown",
        preview: "Hi John, As the holiday season approaches, w...",
        created_at: "2024-12-10T11:00:00Z",
        is_read: 1,
        archived: 0,
        attachments: None,
    },
    SeedEmail {
        sender_name: "Downe Johnson",
        sender_email: "downe.johnson@business.com",
        recipient: "Richard Brown",
        subject: "Invitation: Annual Client Appreciation Event",
        body: "Dear John,\n\nThis is a follow-up to our earlier invitation. We are delighted to invite you to our Annual Client Appreciation Event. Please confirm your attendance at your earliest convenience.\n\nWarm regards,\nDowne Johnson",
        preview: "Dear John, We are delighted to invite you to a...",
        created_at: "2024-12-11T07:00:00Z",
        is_read: 1,
        archived: 0,
        attachments: None,
    },
    SeedEmail {
        sender_name: "Alex Martinez",
        sender_email: "alex.martinez@business.com",
        recipient: "Richard Brown",
        subject: "Q4 Financial Report Summary 📊",
        body: "Hi John,\n\nPlease find attached the Q4 financial report summary. Revenue is up 12% compared to last quarter, and we've exceeded our annual targets.\n\nLet me know if you'd like to schedule a review meeting.\n\nBest,\nAlex Martinez",
        preview: "Hi John, Please find attached the Q4 financial...",
        created_at: "2024-12-09T13:20:00Z",
        is_read: 1,
        archived: 1,
        attachments: Some(r##"[{"name": "Q4-Financial-Report.pdf", "size": "3.1 MB", "url": "#"}]"##),
    },
];

/// Insert the demo rows unless the seed has already been applied.
pub async fn seed_demo(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    if super::is_applied(pool, "002_seed_demo_emails").await? {
        return Ok(());
    }
    for e in SEED_EMAILS {
        sqlx::query(
            "INSERT INTO emails (sender_name, sender_email, recipient, subject, body, preview, created_at, is_read, archived, attachments) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(e.sender_name)
        .bind(e.sender_email)
        .bind(e.recipient)
        .bind(e.subject)
        .bind(e.body)
        .bind(e.preview)
        .bind(e.created_at)
        .bind(e.is_read)
        .bind(e.archived)
        .bind(e.attachments)
        .execute(pool)
        .await?;
    }
    super::mark_applied(pool, "002_seed_demo_emails").await?;
    Ok(())
}
