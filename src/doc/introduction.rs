/*!
# Introductory Tutorial

Begin by opening a terminal and running the executable. There is no
banner and no prompt. BASIC is simply waiting for you to type a line.
Type CTRL-D or `QUIT` to exit. Stop a running program with CTRL-C.

In this tutorial lines that you type are marked with a "`>`".
Let's tell the computer to print something.

<pre><code>&nbsp;> PRINT 6 * 7
&nbsp;  42
</code></pre>

Entering a statement which executes immediately is called direct mode.
To make a program, put a line number in front of the statement.
Any number from 1 to 4294967295 will do.

<pre><code>&nbsp;> 10 PRINT 6 * 7
</code></pre>

Nothing happens. The statement is saved to be executed later.
Let's try a couple of commands.

<pre><code>&nbsp;> LIST
&nbsp;  10 PRINT 6 * 7
&nbsp;> RUN
&nbsp;  42
</code></pre>

Typing a line number that already exists replaces that line.
Typing a line number by itself deletes it.

<pre><code>&nbsp;> 10 PRINT 6 * 9
&nbsp;> 20 PRINT 1
&nbsp;> 20
&nbsp;> LIST
&nbsp;  10 PRINT 6 * 9
</code></pre>

Mistakes are reported right away and the bad line is not stored.
On a terminal the up and down arrows recall what you typed before.

<pre><code>&nbsp;> 10 PRNT 1
&nbsp;  <b>SYNTAX ERROR</b>
</code></pre>

Let's finish with a program that asks for a number and counts down
from it. `CLEAR` erases the program in memory first.

<pre><code>&nbsp;> CLEAR
&nbsp;> 10 INPUT N
&nbsp;> 20 PRINT N
&nbsp;> 30 LET N = N - 1
&nbsp;> 40 IF N > 0 THEN 20
&nbsp;> RUN
&nbsp;>  ? 3
&nbsp;  3
&nbsp;  2
&nbsp;  1
</code></pre>

A program file can be given on the command line. Each line of the file
must start with a line number. Add `--run` to start it right away.

This concludes the introductory tutorial. The rest of this manual is a
reference for expressions and statements.

*/
