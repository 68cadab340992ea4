//! The static guide content: title, metadata, and body string tables.
//!
//! These tables are the single source of the generated document. Their
//! declaration order is the output order; empty entries mark vertical
//! gaps rather than text.

/// Document title.
pub const TITLE: &str = "AI SERVICE HANDOVER & AWS DEPLOYMENT GUIDE";

/// Fixed output path for the generated PDF, relative to the working directory.
pub const OUTPUT_PATH: &str = "docs/AI-service-handover.pdf";

/// Metadata lines rendered under the title.
pub const METADATA_LINES: [&str; 5] = [
    "Prepared for: Mahmoud",
    "Prepared by: Ayed",
    "",
    "AI SERVICE HANDOVER - FULL TECHNICAL DOCUMENTATION + AWS GUIDE",
    "",
];

/// Numbered-section prefixes that mark a body line as a heading.
///
/// Deliberately an enumerated set rather than a numeric range check: the
/// document has sections 1 through 16 and nothing beyond, and sub-section
/// lines like "2.1 Voice Agent" are meant to match their parent prefix.
pub const HEADING_PREFIXES: [&str; 16] = [
    "1.", "2.", "3.", "4.", "5.", "6.", "7.", "8.", "9.", "10.", "11.", "12.", "13.", "14.",
    "15.", "16.",
];

/// Check whether a body line is a numbered heading.
pub fn is_heading(line: &str) -> bool {
    HEADING_PREFIXES.iter().any(|prefix| line.starts_with(prefix))
}

/// Body lines of the guide, in rendering order.
pub const BODY_LINES: &[&str] = &[
    "1. Overview",
    "This document provides a complete technical handover of the AI Service for dental clinics, \
     covering the voice agent, analytics system, PMS integration, public API endpoints, environment \
     configuration, runtime behavior, and AWS deployment strategy. All endpoints are public and do \
     not require JWT or additional authentication.",
    "",
    "2. System Components",
    "2.1 Voice Agent",
    "The voice agent orchestrates conversations using Gemini (via @google/genai), performing intent \
     detection, entity extraction, and leveraging clinic-specific templates stored in Postgres.",
    "2.2 Analytics",
    "The analytics module captures session_started, session_closed, and turn events. Reports aggregate \
     event counts and conversational patterns consumed by the dashboard.",
    "2.3 PMS Integration",
    "The integration layer communicates with PMS providers to book, update, cancel appointments, and \
     submit performance KPIs.",
    "",
    "3. Quick Start (Local Development)",
    "- Create `.env.local` from `.env.example`.",
    "- Required variables: GEMINI_API_KEY, GEMINI_TEXT_MODEL (optional), PROJECT_ID, DATABASE_URL.",
    "- Commands: npm install; npx prisma migrate deploy; npm run seed (optional); npm start.",
    "- Local environment runs on https://localhost:3000.",
    "",
    "4. Public API Endpoints",
    "Voice Agent:",
    "- GET /api/agent/config",
    "",
    "Analytics:",
    "- POST /api/analytics/events",
    "- GET /api/analytics/report",
    "",
    "PMS:",
    "- GET /api/integrations/pms/providers",
    "- POST /api/integrations/pms/:provider/book",
    "- PATCH /api/integrations/pms/:provider/booking/:bookingId",
    "- DELETE /api/integrations/pms/:provider/booking/:bookingId",
    "- POST /api/integrations/pms/:provider/performance",
    "",
    "5. Error Format",
    "All errors follow `{ \"status\": \"error\", \"message\": \"...\", \"details\": \"...\" }`.",
    "",
    "6. Internal Structure",
    "- Conversation Manager: src/services/conversation_manager.ts",
    "- Database Helpers: server/dbBookingIntegration.ts",
    "- PMS Adapters: server/pmsIntegration.ts",
    "- Metrics & Logging: server/systemMetrics.ts, server/audit-logger.ts",
    "",
    "7. Postman Testing",
    "The Postman collection (`docs/AI-service.postman_collection.json`) includes analytics and PMS \
     endpoints with no authentication headers required.",
    "",
    "8. Updated Happy Path",
    "1. Send analytics event.",
    "2. Create PMS booking.",
    "3. Fetch analytics report.",
    "",
    "-----------------------------",
    "AWS DEPLOYMENT GUIDE",
    "-----------------------------",
    "",
    "9. AWS Architecture Overview",
    "Recommended architecture components:",
    "- AWS ECS Fargate or EC2 for hosting the Node.js service.",
    "- AWS RDS (Postgres) for the database.",
    "- AWS API Gateway or Application Load Balancer (ALB) for routing.",
    "- AWS VPC with private subnets.",
    "- AWS Secrets Manager to store API keys and DATABASE_URL.",
    "- Amazon CloudWatch for logs and metrics.",
    "",
    "10. Deployment Steps",
    "1. Build Docker image for the AI Service.",
    "2. Push the image to Amazon ECR.",
    "3. Create an ECS task definition (Fargate recommended).",
    "4. Inject environment variables via Secrets Manager.",
    "5. Deploy the service to an ECS Service in a private subnet.",
    "6. Attach an ALB or API Gateway to expose endpoints publicly.",
    "7. Configure autoscaling rules based on CPU and memory usage.",
    "",
    "11. Environment Configuration for AWS",
    "Use AWS Secrets Manager for GEMINI_API_KEY, GEMINI_TEXT_MODEL, PROJECT_ID, and DATABASE_URL. \
     Expose them to ECS using task definition environment secret mappings.",
    "",
    "12. Logging & Monitoring",
    "- Use CloudWatch Logs for application logs.",
    "- Enable CloudWatch alarms for 5xx error spikes, latency increases, and ECS task restarts.",
    "",
    "13. Scaling Considerations",
    "The service is stateless and horizontally scalable. Configure ECS Fargate autoscaling based on CPU \
     or memory utilization.",
    "",
    "14. Security Notes",
    "- Enforce API Gateway or ALB security group IP allowlists.",
    "- Use VPC private access paths for PMS systems.",
    "- Restrict ALB security groups to trusted networks.",
    "",
    "15. Rollout Checklist",
    "- Deploy the service to ECS.",
    "- Connect AWS RDS Postgres.",
    "- Import `.env` values into Secrets Manager.",
    "- Validate endpoints using the Postman collection.",
    "- Execute the happy-path flow (analytics -> PMS -> report).",
    "- Enable monitoring and alarms.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_detection_full_range() {
        for n in 1..=16 {
            assert!(is_heading(&format!("{}. Some Section", n)), "{} not detected", n);
        }
    }

    #[test]
    fn test_heading_detection_rejects_other_lines() {
        assert!(!is_heading("17. Beyond the enumerated set"));
        assert!(!is_heading("- GET /api/agent/config"));
        assert!(!is_heading("AWS DEPLOYMENT GUIDE"));
        assert!(!is_heading("-----------------------------"));
        assert!(!is_heading(""));
    }

    #[test]
    fn test_subsection_lines_match_parent_prefix() {
        // "2.1 Voice Agent" starts with "2." and is therefore a heading.
        assert!(is_heading("2.1 Voice Agent"));
        assert!(is_heading("2.2 Analytics"));
        assert!(is_heading("2.3 PMS Integration"));
    }

    #[test]
    fn test_tables_have_content() {
        assert!(!TITLE.is_empty());
        assert!(METADATA_LINES.iter().any(|l| !l.is_empty()));
        assert!(BODY_LINES.iter().any(|l| !l.is_empty()));
    }
}
