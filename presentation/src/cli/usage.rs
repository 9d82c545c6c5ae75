//! Usage text

const OPTIONS: &str = concat!(
    "  -s             show quorum status\n",
    "  -l             list nodes\n",
    "  -v <votes>     change the number of votes for a node *\n",
    "  -n <nodeid>    optional nodeid of node for -v\n",
    "  -e <expected>  change expected votes for the cluster *\n",
    "  -H             show nodeids in hexadecimal rather than decimal\n",
    "  -i             show node IP addresses instead of the resolved name\n",
    "  -h             show this help text\n",
);

/// Usage text for `program`, printed on `-h`, no command, or bad values.
pub fn usage_text(program: &str) -> String {
    format!(
        "usage: \n{program} <options>\n\n  options:\n\n{OPTIONS}\n  \
         * Starred items only work if votequorum is the quorum provider for corosync\n\n"
    )
}
